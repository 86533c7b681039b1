use crate::commands::{CmdMessage, CmdResult, NoteCommand, NoteEdits};
use crate::error::Result;
use crate::index::Index;
use crate::model::{Model, Note, Priority};

pub fn run(model: &mut Model, command: NoteCommand) -> Result<CmdResult> {
    match command {
        NoteCommand::Create {
            title,
            description,
            priority,
        } => create(model, title, description, priority),
        NoteCommand::Edit { index, edits } => edit(model, index, &edits),
        NoteCommand::Delete { index } => delete(model, index),
        NoteCommand::List => list(model),
    }
}

fn create(
    model: &mut Model,
    title: String,
    description: String,
    priority: Option<Priority>,
) -> Result<CmdResult> {
    let note = Note::new(title, description, priority);
    let message = format!("New note added: {}", note);
    model.add_note(note)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

fn edit(model: &mut Model, index: Index, edits: &NoteEdits) -> Result<CmdResult> {
    let current = model.note(index)?;
    let edited = Note::new(
        edits.title.clone().unwrap_or_else(|| current.title.clone()),
        edits
            .description
            .clone()
            .unwrap_or_else(|| current.description.clone()),
        edits.priority.or(current.priority),
    );
    let message = format!("Edited note: {}", edited);
    model.set_note(index, edited)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

fn delete(model: &mut Model, index: Index) -> Result<CmdResult> {
    let removed = model.remove_note(index)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Deleted note: {}", removed))))
}

fn list(model: &Model) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for (i, note) in model.notes().iter().enumerate() {
        result.add_message(CmdMessage::info(format!("{}. {}", i + 1, note)));
    }
    result.add_message(CmdMessage::info(format!(
        "{} notes listed!",
        model.notes().len()
    )));
    Ok(result)
}
