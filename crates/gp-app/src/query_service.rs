//! Query batch parsing, execution, and answer output.

use std::io::{Read, Write};
use std::path::Path;

use gp_query::{AnswerBatch, ExecutorOptions, QueryBatch, QueryExecutor, RawQueryBatch};
use gp_store::GraphStore;

use crate::error::{AppError, AppResult};

/// Parse and validate a JSON query batch.
pub fn parse_batch(content: &str) -> AppResult<QueryBatch> {
    let raw: RawQueryBatch =
        serde_json::from_str(content).map_err(|e| AppError::Batch(e.to_string()))?;
    Ok(QueryBatch::try_from(raw)?)
}

/// Read a JSON query batch from `reader` (typically stdin).
pub fn read_batch(mut reader: impl Read) -> AppResult<QueryBatch> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_batch(&content)
}

/// Load a JSON query batch from a file.
pub fn load_batch(path: &Path) -> AppResult<QueryBatch> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::BatchRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_batch(&content)
}

/// Execute a validated batch against `store`.
pub fn run_batch<S>(
    store: &S,
    batch: &QueryBatch,
    options: ExecutorOptions,
) -> AppResult<AnswerBatch>
where
    S: GraphStore + Sync + ?Sized,
{
    let answers = QueryExecutor::new(store).with_options(options).execute(batch)?;
    Ok(AnswerBatch { answers })
}

/// Write `{"answers": [...]}` as one JSON line.
pub fn write_answers(mut writer: impl Write, answers: &AnswerBatch) -> AppResult<()> {
    serde_json::to_writer(&mut writer, answers).map_err(std::io::Error::from)?;
    writeln!(writer)?;
    Ok(())
}
