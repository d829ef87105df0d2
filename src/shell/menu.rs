/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAll,
    Add,
    FilterByAge,
    FilterByClasses,
    Search,
    Update,
    Delete,
    Average,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::ShowAll,
        MenuChoice::Add,
        MenuChoice::FilterByAge,
        MenuChoice::FilterByClasses,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Average,
        MenuChoice::Exit,
    ];

    /// Map a typed line ("1".."9") to a choice. Anything else is `None`.
    pub fn from_input(line: &str) -> Option<Self> {
        let n: usize = line.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ShowAll => "Show all teachers",
            MenuChoice::Add => "Add a teacher",
            MenuChoice::FilterByAge => "Filter teachers by age",
            MenuChoice::FilterByClasses => "Filter teachers by classes",
            MenuChoice::Search => "Search for a teacher",
            MenuChoice::Update => "Update a teacher's record",
            MenuChoice::Delete => "Delete a teacher",
            MenuChoice::Average => "Calculate average number of classes",
            MenuChoice::Exit => "Exit",
        }
    }
}
