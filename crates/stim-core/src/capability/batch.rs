use rayon::prelude::*;

use stim_domain::Stimulus;

use super::{Converted, Extractor, ExtractorResult};
use crate::errors::CoreError;

/// Aplica `extractor` a estímulos independientes en paralelo. El orden del
/// resultado coincide con el de la entrada; el primer error aborta.
pub fn apply_many<E>(extractor: &E, stims: &[Stimulus]) -> Result<Vec<ExtractorResult>, CoreError>
    where E: Extractor + ?Sized
{
    stims.par_iter().map(|s| extractor.apply(s)).collect()
}

/// Aplica `extractor` a cada elemento de una salida de conversión.
pub fn apply_converted<E>(extractor: &E, converted: &Converted) -> Result<Vec<ExtractorResult>, CoreError>
    where E: Extractor + ?Sized
{
    apply_many(extractor, converted.as_slice())
}
