//! Decoding raw patch records into [`Operation`] values.

use serde_json::{Map, Value};

use crate::error::PatchError;
use crate::op::Operation;

/// Parse a whole patch eagerly: every record is shape-checked before any
/// operation is handed out.
pub fn parse_operations(records: &[Value]) -> Result<Vec<Operation>, PatchError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_operation(index, record))
        .collect()
}

/// Parse records one at a time; each record's shape check is deferred until
/// the iterator reaches it.
pub fn parse_operations_lazy(
    records: &[Value],
) -> impl Iterator<Item = Result<Operation, PatchError>> + '_ {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_operation(index, record))
}

/// Parse the raw record at `index` into an [`Operation`].
///
/// Every record carries `op` and `path`; `add`/`replace`/`test` also carry
/// `value`, `move`/`copy` also carry `from`. Unknown extra fields are
/// ignored. Pointer syntax is not checked here; it surfaces when the
/// operation is applied.
pub fn parse_operation(index: usize, record: &Value) -> Result<Operation, PatchError> {
    let record = record
        .as_object()
        .ok_or(PatchError::MalformedPatchInput { index })?;

    let op = required(record, index, "op")?;
    let path = pointer_string(record, index, "path")?;
    let op = op
        .as_str()
        .ok_or(PatchError::UnsupportedOperation { index })?;

    match op {
        "add" => Ok(Operation::Add {
            index,
            path,
            value: required(record, index, "value")?.clone(),
        }),
        "remove" => Ok(Operation::Remove { index, path }),
        "replace" => Ok(Operation::Replace {
            index,
            path,
            value: required(record, index, "value")?.clone(),
        }),
        "move" => Ok(Operation::Move {
            index,
            path,
            from: pointer_string(record, index, "from")?,
        }),
        "copy" => Ok(Operation::Copy {
            index,
            path,
            from: pointer_string(record, index, "from")?,
        }),
        "test" => Ok(Operation::Test {
            index,
            path,
            value: required(record, index, "value")?.clone(),
        }),
        _ => Err(PatchError::UnsupportedOperation { index }),
    }
}

fn required<'a>(
    record: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, PatchError> {
    record
        .get(field)
        .ok_or(PatchError::MissingField { index, field })
}

/// A `path`/`from` field must hold a string; its pointer syntax is checked
/// later, at apply time.
fn pointer_string(
    record: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, PatchError> {
    required(record, index, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(PatchError::MalformedPatchInput { index })
}
