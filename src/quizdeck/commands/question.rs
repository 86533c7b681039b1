use crate::commands::{CmdMessage, CmdResult, QuestionCommand, QuestionEdits};
use crate::error::Result;
use crate::index::Index;
use crate::model::{Model, Question, QuestionKind};

pub fn run(model: &mut Model, command: QuestionCommand) -> Result<CmdResult> {
    match command {
        QuestionCommand::Create { text, answer, kind } => create(model, text, answer, kind),
        QuestionCommand::Edit { index, edits } => edit(model, index, &edits),
        QuestionCommand::Delete { index } => delete(model, index),
        QuestionCommand::List => list(model),
    }
}

fn create(
    model: &mut Model,
    text: String,
    answer: String,
    kind: QuestionKind,
) -> Result<CmdResult> {
    let message = format!("New question added: {} ({})", text, kind);
    model.add_question(Question::new(text, answer, kind))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

fn edit(model: &mut Model, index: Index, edits: &QuestionEdits) -> Result<CmdResult> {
    let current = model.question(index)?;
    let edited = Question::new(
        edits.text.clone().unwrap_or_else(|| current.text.clone()),
        edits
            .answer
            .clone()
            .unwrap_or_else(|| current.answer.clone()),
        edits.kind.unwrap_or(current.kind),
    );
    let message = format!("Edited question: {} ({})", edited.text, edited.kind);
    model.set_question(index, edited)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

fn delete(model: &mut Model, index: Index) -> Result<CmdResult> {
    let removed = model.remove_question(index)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted question: {}",
        removed.text
    ))))
}

fn list(model: &Model) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for (i, question) in model.questions().iter().enumerate() {
        result.add_message(CmdMessage::info(format!(
            "{}. {} ({}) Answer: {}",
            i + 1,
            question.text,
            question.kind,
            question.answer
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "{} questions listed!",
        model.questions().len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MESSAGE_INVALID_QUESTION_INDEX;

    fn one() -> Index {
        Index::from_one_based(1).unwrap()
    }

    fn seeded_model() -> Model {
        let mut model = Model::new();
        run(
            &mut model,
            QuestionCommand::Create {
                text: "What is 2 + 2?".into(),
                answer: "4".into(),
                kind: QuestionKind::OpenEnded,
            },
        )
        .unwrap();
        model
    }

    #[test]
    fn create_then_list() {
        let mut model = seeded_model();
        let result = run(&mut model, QuestionCommand::List).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(
            result.messages[0].content,
            "1. What is 2 + 2? (open) Answer: 4"
        );
        assert_eq!(result.messages[1].content, "1 questions listed!");
    }

    #[test]
    fn edit_keeps_unedited_fields() {
        let mut model = seeded_model();
        let edits = QuestionEdits {
            kind: Some(QuestionKind::Mcq),
            ..Default::default()
        };
        run(&mut model, QuestionCommand::Edit { index: one(), edits }).unwrap();

        let question = &model.questions()[0];
        assert_eq!(question.text, "What is 2 + 2?");
        assert_eq!(question.answer, "4");
        assert_eq!(question.kind, QuestionKind::Mcq);
    }

    #[test]
    fn delete_out_of_range_is_an_execution_error() {
        let mut model = seeded_model();
        let err = run(
            &mut model,
            QuestionCommand::Delete {
                index: Index::from_one_based(5).unwrap(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_INVALID_QUESTION_INDEX);
    }
}
