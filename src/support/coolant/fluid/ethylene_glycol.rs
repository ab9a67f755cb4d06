//! Ethylene glycol and water.

use super::mixture::{MixtureData, property_surface, viscosity_surface};
use crate::support::coolant::FreezeCurve;

pub(super) const DATA: MixtureData = MixtureData {
    t_max: 100.0,
    freeze: FreezeCurve::new(
        0.6,
        &[
            -3.060254677e1,
            -1.191842722e1,
            -1.860030246e2,
            8.296948367e1,
            1.125225706e1,
        ],
    ),
    viscosity: viscosity_surface([
        [-6.148273187, 2.619239252, 1.318445842, 2.153746672, -3.265375952],
        [2.651293364, 1.331746361, -1.044909258e1, -2.388487716, 9.024604112e1],
        [9.490715749e-1, 9.080132022e-1, -1.867772287e1, -1.365253329e1, 1.603724301e2],
    ]),
    density: property_surface([
        [1.03840125e3, 1.3990625e2, -4.302083333e1, -9.0625e1, 2.895833333e2],
        [-4.10097619e-1, -8.178373016e-1, 1.430753968, 2.259920635, -1.11468254e1],
        [-2.734285714e-3, 4.928571429e-3, -1.817460317e-2, -1.666666667e-2, 1.126984127e-1],
    ]),
    specific_heat: property_surface([
        [3.719045e3, -1.889208333e3, -1.16125e3, 3.208333333e2, 1.675e3],
        [2.954505952, 1.139141865e1, -6.334325397e-1, 6.334325397, -1.266865079e1],
        [-8.546428571e-3, -4.663690476e-2, 5.87202381e-1, 1.398809524e-1, -4.208333333],
    ]),
    conductivity: property_surface([
        [4.6530675e-1, -4.1220625e-1, 1.163541667e-1, 4.0625e-2, 9.708333333e-2],
        [9.651388889e-4, -1.709794974e-3, -2.365873016e-3, -8.044312169e-3, 2.876984127e-2],
        [-1.056666667e-6, 1.13531746e-5, -3.865079365e-5, 4.087301587e-5, 3.174603175e-6],
    ]),
};
