use std::fmt::{Display, Formatter};

/// An employee record with a renameable name and an id fixed at construction.
#[derive(Debug)]
pub struct Employee {
    pub name: String,
    id: i32,
}

impl Employee {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { name, id } = self;
        write!(f, "Employee(name={name}, id={id})")
    }
}
