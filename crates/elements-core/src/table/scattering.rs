use crate::common::constants::MAX_ATOMIC_NUMBER;
use crate::domain::ScatteringFactor;

const NO_FIT: ScatteringFactor = ScatteringFactor::PLACEHOLDER;

/// Four-Gaussian X-ray form-factor coefficients, co-indexed with the element rows.
///
/// Each row is `[a1, a2, a3, a4, b1, b2, b3, b4, c]`. Elements without a fit
/// (Po through Ra, and everything past Pu) carry the all-zero placeholder.
#[rustfmt::skip]
pub(crate) static SCATTERING_ROWS: [ScatteringFactor; MAX_ATOMIC_NUMBER] = [
    ScatteringFactor::from_coefficients([0.493, 0.323, 0.140, 0.041, 10.511, 26.126, 3.142, 57.800, 0.003]), // H
    ScatteringFactor::from_coefficients([0.873, 0.631, 0.311, 0.178, 9.104, 3.357, 22.928, 0.982, 0.006]), // He
    ScatteringFactor::from_coefficients([1.128, 0.751, 0.618, 0.465, 3.955, 1.052, 85.391, 168.261, 0.038]), // Li
    ScatteringFactor::from_coefficients([1.592, 1.128, 0.539, 0.703, 43.643, 1.862, 103.483, 0.542, 0.038]), // Be
    ScatteringFactor::from_coefficients([2.055, 1.333, 1.098, 0.707, 23.219, 1.021, 60.350, 0.140, -0.193]), // B
    ScatteringFactor::from_coefficients([2.310, 1.020, 1.589, 0.865, 20.844, 10.208, 0.569, 51.651, 0.216]), // C
    ScatteringFactor::from_coefficients([12.213, 3.132, 2.013, 1.166, 0.006, 9.893, 28.997, 0.583, -11.529]), // N
    ScatteringFactor::from_coefficients([3.049, 2.287, 1.546, 0.867, 13.277, 5.701, 0.324, 32.909, 0.251]), // O
    ScatteringFactor::from_coefficients([3.539, 2.641, 1.517, 1.024, 10.283, 4.294, 0.262, 26.148, 0.278]), // F
    ScatteringFactor::from_coefficients([3.955, 3.112, 1.455, 1.125, 8.404, 3.426, 0.231, 21.718, 0.352]), // Ne
    ScatteringFactor::from_coefficients([4.763, 3.174, 1.267, 1.113, 3.285, 8.842, 0.314, 129.424, 0.676]), // Na
    ScatteringFactor::from_coefficients([5.420, 2.174, 1.227, 2.307, 2.828, 79.261, 0.381, 7.194, 0.858]), // Mg
    ScatteringFactor::from_coefficients([6.420, 1.900, 1.594, 1.965, 3.039, 0.743, 31.547, 85.089, 1.115]), // Al
    ScatteringFactor::from_coefficients([6.292, 3.035, 1.989, 1.541, 2.439, 32.334, 0.678, 81.694, 1.141]), // Si
    ScatteringFactor::from_coefficients([6.435, 4.179, 1.780, 1.491, 1.907, 27.157, 0.526, 68.164, 1.115]), // P
    ScatteringFactor::from_coefficients([6.905, 5.203, 1.438, 1.586, 1.468, 22.215, 0.254, 56.172, 0.867]), // S
    ScatteringFactor::from_coefficients([11.460, 7.196, 6.256, 1.645, 0.010, 1.166, 18.519, 47.778, -9.557]), // Cl
    ScatteringFactor::from_coefficients([7.484, 6.772, 0.654, 1.644, 0.907, 14.841, 43.898, 33.393, 1.444]), // Ar
    ScatteringFactor::from_coefficients([8.219, 7.440, 1.052, 0.866, 12.795, 0.775, 213.187, 41.684, 1.423]), // K
    ScatteringFactor::from_coefficients([8.627, 7.387, 1.590, 1.021, 10.442, 0.660, 85.748, 178.437, 1.375]), // Ca
    ScatteringFactor::from_coefficients([9.189, 7.368, 1.641, 1.468, 9.021, 0.573, 136.108, 51.353, 1.333]), // Sc
    ScatteringFactor::from_coefficients([9.759, 7.356, 1.699, 1.902, 7.851, 0.500, 35.634, 116.105, 1.281]), // Ti
    ScatteringFactor::from_coefficients([10.297, 7.351, 2.070, 2.057, 6.866, 0.438, 26.894, 102.478, 1.220]), // V
    ScatteringFactor::from_coefficients([10.641, 7.354, 3.324, 1.492, 6.104, 0.392, 20.263, 98.740, 1.183]), // Cr
    ScatteringFactor::from_coefficients([11.282, 7.357, 3.019, 2.244, 5.341, 0.343, 17.867, 83.754, 1.090]), // Mn
    ScatteringFactor::from_coefficients([11.769, 7.357, 3.522, 2.305, 4.761, 0.307, 15.354, 76.881, 1.037]), // Fe
    ScatteringFactor::from_coefficients([12.284, 7.341, 4.003, 2.349, 4.279, 0.278, 13.536, 71.169, 1.012]), // Co
    ScatteringFactor::from_coefficients([12.838, 7.292, 4.444, 2.380, 3.878, 0.257, 12.176, 66.342, 1.034]), // Ni
    ScatteringFactor::from_coefficients([13.338, 7.168, 5.616, 1.673, 3.583, 0.247, 11.397, 64.831, 1.191]), // Cu
    ScatteringFactor::from_coefficients([14.074, 7.032, 5.165, 2.410, 3.266, 0.233, 10.316, 58.710, 1.304]), // Zn
    ScatteringFactor::from_coefficients([15.235, 6.701, 4.359, 2.962, 3.067, 0.241, 10.781, 61.414, 1.719]), // Ga
    ScatteringFactor::from_coefficients([16.082, 6.375, 3.707, 3.683, 2.851, 0.252, 11.447, 54.763, 2.131]), // Ge
    ScatteringFactor::from_coefficients([16.672, 6.070, 3.431, 4.278, 2.635, 0.265, 12.948, 47.797, 2.531]), // As
    ScatteringFactor::from_coefficients([17.001, 5.820, 3.973, 4.354, 2.410, 0.273, 15.237, 43.816, 2.841]), // Se
    ScatteringFactor::from_coefficients([17.179, 5.236, 5.638, 3.985, 2.172, 16.580, 0.261, 41.433, 2.956]), // Br
    ScatteringFactor::from_coefficients([17.355, 6.729, 5.549, 3.537, 1.938, 16.562, 0.226, 39.397, 2.825]), // Kr
    ScatteringFactor::from_coefficients([17.178, 9.644, 5.140, 1.529, 1.789, 17.315, 0.275, 164.934, 3.487]), // Rb
    ScatteringFactor::from_coefficients([17.566, 9.818, 5.422, 2.669, 1.556, 14.099, 0.166, 132.376, 2.506]), // Sr
    ScatteringFactor::from_coefficients([17.776, 10.295, 5.726, 3.266, 1.403, 12.801, 0.261, 104.354, 1.912]), // Y
    ScatteringFactor::from_coefficients([17.876, 10.948, 5.417, 3.657, 1.276, 11.916, 0.118, 87.663, 2.069]), // Zr
    ScatteringFactor::from_coefficients([17.614, 12.014, 4.042, 3.533, 1.189, 11.766, 0.205, 69.796, 3.756]), // Nb
    ScatteringFactor::from_coefficients([3.703, 17.236, 12.888, 3.743, 0.277, 1.096, 11.004, 61.658, 4.387]), // Mo
    ScatteringFactor::from_coefficients([19.130, 11.095, 4.649, 2.713, 0.864, 8.145, 21.571, 86.847, 5.404]), // Tc
    ScatteringFactor::from_coefficients([19.267, 12.918, 4.863, 1.568, 0.809, 8.435, 24.800, 94.293, 5.379]), // Ru
    ScatteringFactor::from_coefficients([19.296, 14.350, 4.734, 1.289, 0.752, 8.218, 25.875, 98.606, 5.328]), // Rh
    ScatteringFactor::from_coefficients([19.332, 15.502, 5.295, 0.606, 0.699, 7.989, 25.205, 76.899, 5.266]), // Pd
    ScatteringFactor::from_coefficients([19.281, 16.688, 4.805, 1.046, 0.645, 7.473, 24.660, 99.816, 5.179]), // Ag
    ScatteringFactor::from_coefficients([19.221, 17.644, 4.461, 1.603, 0.595, 6.909, 24.701, 87.482, 5.069]), // Cd
    ScatteringFactor::from_coefficients([19.162, 18.560, 4.295, 2.040, 0.548, 6.378, 25.850, 92.803, 4.939]), // In
    ScatteringFactor::from_coefficients([19.189, 19.101, 4.458, 2.466, 5.830, 0.503, 26.891, 83.957, 4.782]), // Sn
    ScatteringFactor::from_coefficients([19.642, 19.045, 5.037, 2.683, 5.303, 0.461, 27.907, 75.283, 4.591]), // Sb
    ScatteringFactor::from_coefficients([19.964, 19.014, 6.145, 2.524, 4.817, 0.421, 28.528, 70.840, 4.352]), // Te
    ScatteringFactor::from_coefficients([20.147, 18.995, 7.514, 2.273, 4.347, 0.381, 27.766, 66.878, 4.071]), // I
    ScatteringFactor::from_coefficients([20.293, 19.030, 8.977, 1.990, 3.928, 0.344, 26.466, 64.266, 3.712]), // Xe
    ScatteringFactor::from_coefficients([20.389, 19.106, 10.662, 1.495, 3.569, 0.311, 24.388, 213.904, 3.335]), // Cs
    ScatteringFactor::from_coefficients([20.336, 19.297, 10.888, 2.696, 3.216, 0.276, 20.207, 167.202, 2.773]), // Ba
    ScatteringFactor::from_coefficients([20.578, 19.599, 11.373, 3.287, 2.948, 0.244, 18.773, 133.124, 2.147]), // La
    ScatteringFactor::from_coefficients([21.167, 19.770, 11.851, 3.330, 2.812, 0.227, 17.608, 127.113, 1.863]), // Ce
    ScatteringFactor::from_coefficients([22.044, 19.670, 12.386, 2.824, 2.774, 0.222, 16.767, 143.644, 2.058]), // Pr
    ScatteringFactor::from_coefficients([22.684, 19.685, 12.774, 2.851, 2.662, 0.211, 15.885, 137.903, 1.985]), // Nd
    ScatteringFactor::from_coefficients([23.340, 19.610, 13.123, 2.875, 2.563, 0.202, 15.101, 132.721, 2.029]), // Pm
    ScatteringFactor::from_coefficients([24.004, 19.426, 13.440, 2.896, 2.473, 0.196, 14.400, 128.007, 2.210]), // Sm
    ScatteringFactor::from_coefficients([24.627, 19.089, 13.760, 2.293, 2.388, 0.194, 13.755, 123.174, 2.575]), // Eu
    ScatteringFactor::from_coefficients([25.071, 19.080, 13.852, 3.545, 2.253, 0.182, 12.933, 101.398, 2.420]), // Gd
    ScatteringFactor::from_coefficients([25.898, 18.219, 14.317, 2.954, 2.243, 0.196, 12.665, 115.362, 3.583]), // Tb
    ScatteringFactor::from_coefficients([26.507, 17.638, 14.560, 2.966, 2.180, 0.202, 12.190, 111.874, 4.297]), // Dy
    ScatteringFactor::from_coefficients([26.905, 17.294, 14.558, 3.638, 2.071, 0.198, 11.441, 92.657, 4.568]), // Ho
    ScatteringFactor::from_coefficients([27.656, 16.428, 14.978, 2.982, 2.074, 0.224, 11.360, 105.703, 5.920]), // Er
    ScatteringFactor::from_coefficients([28.182, 15.885, 15.154, 2.987, 2.029, 0.239, 10.998, 102.961, 6.756]), // Tm
    ScatteringFactor::from_coefficients([28.664, 15.434, 15.309, 2.990, 1.989, 0.257, 10.665, 100.417, 7.567]), // Yb
    ScatteringFactor::from_coefficients([28.948, 15.221, 15.100, 3.716, 1.902, 9.985, 0.261, 84.330, 7.976]), // Lu
    ScatteringFactor::from_coefficients([29.144, 15.173, 14.759, 4.300, 1.833, 9.600, 0.275, 72.029, 8.582]), // Hf
    ScatteringFactor::from_coefficients([29.202, 15.229, 14.514, 4.765, 1.773, 9.370, 0.296, 63.364, 9.244]), // Ta
    ScatteringFactor::from_coefficients([0.000, 0.000, 0.000, 0.000, 1.722, 9.231, 0.323, 57.725, 9.858]), // W
    ScatteringFactor::from_coefficients([28.762, 15.719, 14.556, 5.442, 1.672, 9.092, 0.350, 52.086, 10.472]), // Re
    ScatteringFactor::from_coefficients([28.189, 16.155, 14.931, 5.676, 1.629, 8.979, 0.383, 48.165, 11.000]), // Os
    ScatteringFactor::from_coefficients([27.305, 16.730, 15.611, 5.834, 1.593, 8.866, 0.418, 45.001, 11.472]), // Ir
    ScatteringFactor::from_coefficients([27.006, 17.764, 15.713, 5.784, 1.513, 8.812, 0.425, 38.610, 11.688]), // Pt
    ScatteringFactor::from_coefficients([16.882, 18.591, 25.558, 5.860, 0.461, 8.622, 1.483, 36.396, 12.066]), // Au
    ScatteringFactor::from_coefficients([20.681, 19.042, 21.657, 5.968, 0.545, 8.448, 1.573, 38.325, 12.609]), // Hg
    ScatteringFactor::from_coefficients([27.545, 19.158, 15.538, 5.526, 0.655, 8.708, 1.963, 45.815, 13.175]), // Tl
    ScatteringFactor::from_coefficients([31.062, 13.064, 18.442, 5.970, 0.690, 2.358, 8.618, 47.258, 13.412]), // Pb
    ScatteringFactor::from_coefficients([33.369, 12.951, 16.588, 6.469, 0.704, 2.924, 8.794, 48.009, 13.578]), // Bi
    NO_FIT, // Po
    NO_FIT, // At
    NO_FIT, // Rn
    NO_FIT, // Fr
    NO_FIT, // Ra
    ScatteringFactor::from_coefficients([35.660, 23.103, 12.598, 4.087, 0.589, 3.652, 18.599, 117.020, 13.527]), // Ac
    ScatteringFactor::from_coefficients([35.564, 23.422, 12.747, 4.807, 0.563, 3.462, 17.831, 99.172, 13.431]), // Th
    ScatteringFactor::from_coefficients([35.885, 23.295, 14.189, 4.173, 0.548, 3.415, 16.924, 105.251, 13.429]), // Pa
    ScatteringFactor::from_coefficients([0.000, 0.000, 0.000, 0.000, 0.530, 3.335, 16.143, 101.371, 13.393]), // U
    ScatteringFactor::from_coefficients([36.187, 23.596, 15.640, 4.186, 0.512, 3.254, 15.362, 97.491, 13.357]), // Np
    ScatteringFactor::from_coefficients([36.526, 23.808, 16.771, 3.479, 0.499, 3.264, 14.946, 105.980, 13.381]), // Pu
    NO_FIT, // Am
    NO_FIT, // Cm
    NO_FIT, // Bk
    NO_FIT, // Cf
    NO_FIT, // Es
    NO_FIT, // Fm
    NO_FIT, // Md
    NO_FIT, // No
    NO_FIT, // Lr
    NO_FIT, // Rf
    NO_FIT, // Db
];
