use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Model;
use std::path::PathBuf;

// The parser has already checked that the path exists; spreadsheet contents
// are handled by a separate import layer, so execution only records the file.
pub fn add(model: &mut Model, path: PathBuf) -> Result<CmdResult> {
    let message = format!("Statistics file recorded: {}", path.display());
    model.record_statistics_file(path);
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_the_path_on_the_model() {
        let mut model = Model::new();
        let result = add(&mut model, PathBuf::from("results.xlsx")).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Statistics file recorded: results.xlsx"
        );
        assert_eq!(model.statistics_files(), [PathBuf::from("results.xlsx")]);
    }
}
