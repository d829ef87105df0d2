//! Menu-driven text interface over a [`Store`].
//!
//! The shell owns nothing but its input/output handles; the store is passed
//! in by the caller and every handler works on it directly. Recoverable
//! [`RegistryError`]s are printed and the menu is shown again. Only console
//! I/O failures end the loop with an error.

pub mod menu;
pub mod render;

pub use menu::MenuChoice;

use crate::Result;
use crate::error::{RegistryError, parse_int};
use crate::query;
use crate::record::{Field, Teacher};
use crate::store::Store;

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Input closed while a prompt was waiting.
#[derive(Debug, Error)]
#[error("end of input")]
struct EndOfInput;

pub struct Shell<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Run the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self, store: &mut Store) -> Result<()> {
        loop {
            self.write_menu()?;

            let line = match self.prompt("Enter your choice") {
                Ok(line) => line,
                Err(e) if e.is::<EndOfInput>() => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::from_input(&line) else {
                writeln!(self.out, "Invalid choice. Please enter a valid option.")?;
                continue;
            };
            debug!(?choice, "menu selection");

            if choice == MenuChoice::Exit {
                break;
            }

            if let Err(e) = self.dispatch(choice, store) {
                if e.is::<EndOfInput>() {
                    break;
                }
                match e.downcast::<RegistryError>() {
                    Ok(err) => {
                        warn!(%err, "operation failed");
                        writeln!(self.out, "{}", err.user_message())?;
                    }
                    Err(other) => return Err(other),
                }
            }
        }

        writeln!(self.out, "Exiting the Teacher Management System. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, store: &mut Store) -> Result<()> {
        match choice {
            MenuChoice::ShowAll => self.show_all(store),
            MenuChoice::Add => self.add(store),
            MenuChoice::FilterByAge => self.filter_by_age(store),
            MenuChoice::FilterByClasses => self.filter_by_classes(store),
            MenuChoice::Search => self.search(store),
            MenuChoice::Update => self.update(store),
            MenuChoice::Delete => self.delete(store),
            MenuChoice::Average => self.average(store),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Teacher Management System:")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Print "Enter {label}: " and read one line, without its line ending.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(trimmed.to_string())
    }

    fn prompt_int(&mut self, label: &str, field: &'static str) -> Result<i32> {
        let raw = self.prompt(label)?;
        Ok(parse_int(field, &raw)?)
    }

    fn show_all(&mut self, store: &Store) -> Result<()> {
        render::write_listing(&mut self.out, "All Teachers:", store.records())?;
        Ok(())
    }

    fn add(&mut self, store: &mut Store) -> Result<()> {
        let name = self.prompt("Enter teacher's full name")?;
        let age = self.prompt_int("Enter teacher's age", "age")?;
        let dob = self.prompt("Enter teacher's date of birth (YYYY-MM-DD)")?;
        let num_classes = self.prompt_int("Enter number of classes", "number of classes")?;

        store.add(Teacher::new(name, age, dob, num_classes))?;
        writeln!(self.out, "Teacher added successfully.")?;
        Ok(())
    }

    fn filter_by_age(&mut self, store: &Store) -> Result<()> {
        let age = self.prompt_int("Enter the age criteria", "age")?;
        let found = query::filter_by_age(store.records(), age);
        let header = format!("Teachers aged {}:", age);
        render::write_listing(&mut self.out, &header, &found)?;
        Ok(())
    }

    fn filter_by_classes(&mut self, store: &Store) -> Result<()> {
        let count = self.prompt_int("Enter the number of classes criteria", "number of classes")?;
        let found = query::filter_by_classes(store.records(), count);
        let header = format!("Teachers with {} classes:", count);
        render::write_listing(&mut self.out, &header, &found)?;
        Ok(())
    }

    fn search(&mut self, store: &Store) -> Result<()> {
        let text = self.prompt("Enter the full name to search")?;
        let found = query::search(store.records(), &text);
        let header = format!("Teachers matching \"{}\":", text);
        render::write_listing(&mut self.out, &header, &found)?;
        Ok(())
    }

    fn update(&mut self, store: &mut Store) -> Result<()> {
        let name = self.prompt("Enter the full name of the teacher to update")?;
        render::write_teacher(&mut self.out, store.find(&name)?)?;

        let field_text = self.prompt("Enter the field to update (name/age/dob/num_classes)")?;
        let field: Field = field_text.parse()?;
        let value = self.prompt(&format!("Enter the new value for {}", field))?;

        store.update(&name, field, &value)?;
        writeln!(self.out, "Teacher updated successfully.")?;
        Ok(())
    }

    fn delete(&mut self, store: &mut Store) -> Result<()> {
        let name = self.prompt("Enter the full name of the teacher to delete")?;
        store.delete(&name)?;
        writeln!(self.out, "Teacher deleted successfully.")?;
        Ok(())
    }

    fn average(&mut self, store: &Store) -> Result<()> {
        let avg = query::average_classes(store.records())?;
        writeln!(self.out, "Average Number of Classes: {}", avg)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Run a whole session against a fresh store seeded with `seed`.
    fn session(dir: &TempDir, seed: &[Teacher], input: &str) -> (Store, String) {
        let path = dir.path().join("teachers.json");
        let mut store = Store::load(&path).unwrap();
        for t in seed {
            store.add(t.clone()).unwrap();
        }

        let mut out = Vec::new();
        Shell::new(Cursor::new(input.as_bytes().to_vec()), &mut out)
            .run(&mut store)
            .unwrap();
        (store, String::from_utf8(out).unwrap())
    }

    fn anns() -> Vec<Teacher> {
        vec![
            Teacher::new("Ann Lee", 30, "1994-01-01", 4),
            Teacher::new("Ann Smith", 35, "1989-05-17", 3),
        ]
    }

    #[test]
    fn exit_prints_goodbye() {
        let dir = TempDir::new().unwrap();
        let (_, out) = session(&dir, &[], "9\n");
        assert!(out.contains("1. Show all teachers"));
        assert!(out.contains("9. Exit"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let dir = TempDir::new().unwrap();
        let (_, out) = session(&dir, &[], "");
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let dir = TempDir::new().unwrap();
        let (_, out) = session(&dir, &[], "42\nabc\n9\n");
        assert_eq!(out.matches("Invalid choice").count(), 2);
        assert_eq!(out.matches("Teacher Management System:").count(), 3);
    }

    #[test]
    fn add_then_show() {
        let dir = TempDir::new().unwrap();
        let (store, out) = session(&dir, &[], "2\nAnn Lee\n30\n1994-01-01\n4\n1\n9\n");
        assert!(out.contains("Teacher added successfully."));
        assert!(out.contains("All Teachers:\nName: Ann Lee\nAge: 30\n"));

        let reloaded = Store::load(store.path()).unwrap();
        assert_eq!(
            reloaded.records(),
            &[Teacher::new("Ann Lee", 30, "1994-01-01", 4)]
        );
    }

    #[test]
    fn add_with_bad_age_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (store, out) = session(&dir, &[], "2\nAnn Lee\nthirty\n9\n");
        assert!(out.contains("Invalid number"));
        assert!(store.records().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn filters_and_search_list_matches() {
        let dir = TempDir::new().unwrap();
        let (_, out) = session(&dir, &anns(), "3\n35\n4\n4\n5\nSMITH\n9\n");

        assert!(out.contains("Teachers aged 35:\nName: Ann Smith\n"));
        assert!(out.contains("Teachers with 4 classes:\nName: Ann Lee\n"));
        assert!(out.contains("Teachers matching \"SMITH\":\nName: Ann Smith\n"));
    }

    #[test]
    fn update_changes_first_match_only() {
        let dir = TempDir::new().unwrap();
        let (store, out) = session(&dir, &anns(), "6\nann\nage\n40\n9\n");
        assert!(out.contains("Enter the new value for age: "));
        assert!(out.contains("Teacher updated successfully."));

        let reloaded = Store::load(store.path()).unwrap();
        assert_eq!(reloaded.records()[0].age, 40);
        assert_eq!(reloaded.records()[1].age, 35);
    }

    #[test]
    fn search_header_shows_text_verbatim() {
        let dir = TempDir::new().unwrap();
        let (_, out) = session(&dir, &anns(), "5\nO\"Brien\\\n9\n");
        assert!(out.contains("Teachers matching \"O\"Brien\\\":\nNo matching teachers.\n"));
    }

    #[test]
    fn failed_save_keeps_menu_running_and_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("teachers.json");
        let mut store = Store::load(&path).unwrap();

        let mut out = Vec::new();
        Shell::new(
            Cursor::new(b"2\nAnn Lee\n30\n1994-01-01\n4\n1\n8\n9\n".to_vec()),
            &mut out,
        )
        .run(&mut store)
        .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Could not save teachers"));
        assert!(!out.contains("Teacher added successfully."));
        assert!(out.contains("All Teachers:\nNo matching teachers.\n"));
        assert!(out.contains("No teachers available to calculate average classes."));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(store.records().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn update_with_invalid_field_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let (store, out) = session(&dir, &anns(), "6\nlee\nsalary\n9\n");

        assert!(out.contains("Invalid field: salary."));
        assert!(!out.contains("Enter the new value"));
        assert_eq!(store.records(), anns().as_slice());
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            serde_json::to_string_pretty(&anns()).unwrap()
        );
    }

    #[test]
    fn update_unknown_teacher() {
        let dir = TempDir::new().unwrap();
        let (_, out) = session(&dir, &anns(), "6\nzed\n9\n");
        assert!(out.contains("Teacher not found."));
    }

    #[test]
    fn delete_then_average() {
        let dir = TempDir::new().unwrap();
        let (store, out) = session(&dir, &anns(), "7\nlee\n8\n7\nnobody\n9\n");
        assert!(out.contains("Teacher deleted successfully."));
        assert!(out.contains("Average Number of Classes: 3\n"));
        assert!(out.contains("Teacher not found."));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn average_of_empty_store() {
        let dir = TempDir::new().unwrap();
        let (_, out) = session(&dir, &[], "8\n9\n");
        assert!(out.contains("No teachers available to calculate average classes."));
    }
}
