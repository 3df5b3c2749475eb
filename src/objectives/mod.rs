//! Ready-made objectives with matching run presets.
//!
//! Each objective implements [`Objective`](crate::ga::Objective) and exposes
//! a `config()` preset sized for it:
//!
//! | Objective               | Params | Bits | Bounds      | Direction |
//! |-------------------------|--------|------|-------------|-----------|
//! | [`SurfaceObjective`]    | 2      | 5    | [0, 100]    | maximize  |
//! | [`CurveFitObjective`]   | 3      | 5    | [0, 3]      | minimize  |
//! | [`NeuronObjective`]     | 9      | 8    | [-10, 10]   | minimize  |

mod curve_fit;
mod neuron;
mod surface;

pub use curve_fit::{CurveFitObjective, CURVE_SAMPLES};
pub use neuron::{NeuronObjective, XOR_TABLE};
pub use surface::SurfaceObjective;
