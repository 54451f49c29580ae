use sv_core::{decode_results, ResponseError, ResultSet};

/// Decode a raw search response into a result set.
///
/// Element-level problems are contained in the returned set (see
/// [`ResultSet::skipped`]); only a structurally unusable payload fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecodeResultsUseCase;

impl DecodeResultsUseCase {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "usecase.results.decode.execute",
        skip(self, raw),
        fields(payload_len = raw.len())
    )]
    pub fn execute(&self, raw: &[u8]) -> Result<ResultSet, ResponseError> {
        match decode_results(raw) {
            Ok(set) => {
                if set.skipped_count() > 0 {
                    tracing::warn!(
                        skipped = set.skipped_count(),
                        decoded = set.len(),
                        "some result elements were dropped"
                    );
                }
                Ok(set)
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to parse results");
                Err(err)
            }
        }
    }
}
