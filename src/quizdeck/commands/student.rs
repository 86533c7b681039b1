use crate::commands::{CmdMessage, CmdResult, StudentEdits};
use crate::error::Result;
use crate::index::Index;
use crate::model::{Model, Student};

fn describe(student: &Student) -> String {
    let mut text = student.name.clone();
    if let Some(phone) = &student.phone {
        text.push_str(&format!(" Phone: {}", phone));
    }
    if let Some(email) = &student.email {
        text.push_str(&format!(" Email: {}", email));
    }
    text
}

pub fn add(
    model: &mut Model,
    name: String,
    phone: Option<String>,
    email: Option<String>,
) -> Result<CmdResult> {
    let student = Student::new(name, phone, email);
    let message = format!("New student added: {}", describe(&student));
    model.add_student(student)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

pub fn edit(model: &mut Model, index: Index, edits: &StudentEdits) -> Result<CmdResult> {
    let current = model.student(index)?;
    let edited = Student::new(
        edits.name.clone().unwrap_or_else(|| current.name.clone()),
        edits.phone.clone().or_else(|| current.phone.clone()),
        edits.email.clone().or_else(|| current.email.clone()),
    );
    let message = format!("Edited student: {}", describe(&edited));
    model.set_student(index, edited)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

pub fn delete(model: &mut Model, index: Index) -> Result<CmdResult> {
    let removed = model.remove_student(index)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted student: {}",
        describe(&removed)
    ))))
}

pub fn find(model: &Model, keywords: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let found = model.find_students(keywords);
    for (i, student) in found.iter().enumerate() {
        result.add_message(CmdMessage::info(format!(
            "{}. {}",
            i + 1,
            describe(student)
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "{} students listed!",
        found.len()
    )));
    Ok(result)
}

pub fn list(model: &Model) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for (i, student) in model.students().iter().enumerate() {
        result.add_message(CmdMessage::info(format!(
            "{}. {}",
            i + 1,
            describe(student)
        )));
    }
    result.add_message(CmdMessage::info("Listed all students"));
    Ok(result)
}

pub fn clear(model: &mut Model) -> Result<CmdResult> {
    model.clear_students();
    Ok(CmdResult::default().with_message(CmdMessage::success("Class list has been cleared!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MESSAGE_INVALID_STUDENT_INDEX;

    fn one() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn add_reports_the_new_record() {
        let mut model = Model::new();
        let result = add(&mut model, "John Doe".into(), Some("98765432".into()), None).unwrap();
        assert_eq!(
            result.messages[0].content,
            "New student added: John Doe Phone: 98765432"
        );
        assert_eq!(model.students().len(), 1);
    }

    #[test]
    fn edit_merges_with_existing_fields() {
        let mut model = Model::new();
        add(
            &mut model,
            "John Doe".into(),
            Some("98765432".into()),
            Some("johnd@example.com".into()),
        )
        .unwrap();

        let edits = StudentEdits {
            phone: Some("91234567".into()),
            ..Default::default()
        };
        edit(&mut model, one(), &edits).unwrap();

        let student = &model.students()[0];
        assert_eq!(student.name, "John Doe");
        assert_eq!(student.phone.as_deref(), Some("91234567"));
        assert_eq!(student.email.as_deref(), Some("johnd@example.com"));
    }

    #[test]
    fn delete_out_of_range_is_an_execution_error() {
        let mut model = Model::new();
        let err = delete(&mut model, one()).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_INVALID_STUDENT_INDEX);
    }

    #[test]
    fn find_counts_matches() {
        let mut model = Model::new();
        add(&mut model, "Alice Pauline".into(), None, None).unwrap();
        add(&mut model, "Bob Choo".into(), None, None).unwrap();

        let result = find(&model, &["alice".into()]).unwrap();
        assert_eq!(result.messages.last().unwrap().content, "1 students listed!");
    }

    #[test]
    fn clear_empties_the_list() {
        let mut model = Model::new();
        add(&mut model, "Alice".into(), None, None).unwrap();
        clear(&mut model).unwrap();
        assert!(model.students().is_empty());
    }
}
