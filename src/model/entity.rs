/// Ordered attribute names shared by every entity of a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSchema {
    names: Vec<String>,
}

impl AttributeSchema {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A named point in attribute space. `values` follow the schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    pub values: Vec<f64>,
}

impl Entity {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Team,
    Applicants,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::Team => write!(f, "team"),
            Group::Applicants => write!(f, "applicants"),
        }
    }
}

/// Validated team and applicants. Only built by stage 1, so every entity
/// carries exactly `schema.len()` finite values and the team is non-empty.
#[derive(Debug, Clone)]
pub struct Roster {
    schema: AttributeSchema,
    team: Vec<Entity>,
    applicants: Vec<Entity>,
}

impl Roster {
    pub(crate) fn from_parts(
        schema: AttributeSchema,
        team: Vec<Entity>,
        applicants: Vec<Entity>,
    ) -> Self {
        Self {
            schema,
            team,
            applicants,
        }
    }

    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    pub fn team(&self) -> &[Entity] {
        &self.team
    }

    pub fn applicants(&self) -> &[Entity] {
        &self.applicants
    }
}
