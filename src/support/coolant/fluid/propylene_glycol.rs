//! Propylene glycol and water.

use super::mixture::{MixtureData, property_surface, viscosity_surface};
use crate::support::coolant::FreezeCurve;

pub(super) const DATA: MixtureData = MixtureData {
    t_max: 100.0,
    freeze: FreezeCurve::new(
        0.6,
        &[
            -1.824032756e1,
            -1.305589202e2,
            3.161133080e2,
            -5.470657276e2,
            1.358234019e2,
        ],
    ),
    viscosity: viscosity_surface([
        [-5.810805727, 3.860592654, -4.963792769e-1, -1.143827729, 1.014731284e1],
        [3.411168884, 4.51743902, -2.42367905e1, -2.148922941e1, 2.109828923e2],
        [1.581304294, 2.60987814, -3.284060622e1, -2.483169064e1, 2.719087514e2],
    ]),
    density: property_surface([
        [1.023737e3, 8.844166667e1, -1.933333333e1, -9.416666667e1, 6.333333333e1],
        [-4.683041667e-1, -1.11016369, 1.873561508, 3.635416667, -1.621924603e1],
        [-2.970833333e-3, 6.423611111e-3, -2.346230159e-2, -2.331349206e-2, 1.498015873e-1],
    ]),
    specific_heat: property_surface([
        [3.8514225e3, -1.345020833e3, -9.727083333e2, -5.479166667e2, 5.458333333e2],
        [2.70025, 5.360813492, -3.760912698, 3.760912698e1, -7.521825397e1],
        [-1.373809524e-3, -9.98015873e-3, 1.501984127e-1, -3.115079365e-1, -9.126984127e-2],
    ]),
    conductivity: property_surface([
        [4.45093e-1, -4.590666667e-1, 1.08375e-1, -6.833333333e-2, 5.825e-1],
        [8.294105159e-4, -1.907799272e-3, 1.062003968e-4, -6.83912037e-3, 1.59890873e-2],
        [4.65952381e-7, 9.176587302e-6, -8.253968254e-5, 6.329365079e-5, 3.087301587e-4],
    ]),
};
