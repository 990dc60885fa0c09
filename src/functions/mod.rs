//! transcendental function suite
//!
//! Every series-based routine works a few guard digits wide of the
//! requested precision and narrows its final result, so accumulated
//! per-term rounding stays below the error-corrected digits.

use crate::{Context, WORK_GUARD};

pub(crate) mod exp;
pub(crate) mod log;
pub(crate) mod sqrt;
pub(crate) mod trig;
pub(crate) mod inverse_trig;
pub(crate) mod hyperbolic;
pub(crate) mod erf;
pub(crate) mod factorial;

/// Internal context for series evaluation
pub(crate) fn working(ctx: &Context) -> Context {
    ctx.widened(WORK_GUARD)
}
