//! Typed field and operator names.
//!
//! Every filterable task attribute is a [`Field`] variant tagged with a
//! [`FieldKind`]; which [`Operator`]s apply to which kind is decided by a
//! single `match` in [`FieldKind::supports`].

use std::fmt;
use std::str::FromStr;

/// Value type of a field, which determines the operators it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// One of a fixed set of names (priority, status).
    Select,
    /// A calendar date.
    Date,
    /// A non-negative integer.
    Number,
    /// A flag that is always present.
    Boolean,
    /// A reference to a task list.
    List,
}

impl FieldKind {
    /// Returns true if `operator` may be applied to fields of this kind.
    pub fn supports(&self, operator: Operator) -> bool {
        use Operator::*;

        match self {
            FieldKind::Select | FieldKind::List => {
                matches!(operator, Eq | Neq | In | IsNull | IsNotNull)
            }
            FieldKind::Date => matches!(
                operator,
                Eq | Neq | Lt | Lte | Gt | Gte | IsNull | IsNotNull
            ),
            FieldKind::Number => true,
            FieldKind::Boolean => matches!(operator, Eq | Neq),
        }
    }

    /// Returns the kind's name as shown in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Select => "select",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::List => "list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filterable and sortable task attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Priority,
    Status,
    DueDate,
    StartDate,
    CreatedAt,
    EstimatedMinutes,
    ListId,
    HasSubtasks,
    IsRecurring,
}

impl Field {
    /// All known fields.
    pub const ALL: [Field; 9] = [
        Field::Priority,
        Field::Status,
        Field::DueDate,
        Field::StartDate,
        Field::CreatedAt,
        Field::EstimatedMinutes,
        Field::ListId,
        Field::HasSubtasks,
        Field::IsRecurring,
    ];

    /// Returns the field name as written in filter configurations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Priority => "priority",
            Field::Status => "status",
            Field::DueDate => "due_date",
            Field::StartDate => "start_date",
            Field::CreatedAt => "created_at",
            Field::EstimatedMinutes => "estimated_minutes",
            Field::ListId => "list_id",
            Field::HasSubtasks => "has_subtasks",
            Field::IsRecurring => "is_recurring",
        }
    }

    /// Returns the value type of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Priority | Field::Status => FieldKind::Select,
            Field::DueDate | Field::StartDate | Field::CreatedAt => FieldKind::Date,
            Field::EstimatedMinutes => FieldKind::Number,
            Field::ListId => FieldKind::List,
            Field::HasSubtasks | Field::IsRecurring => FieldKind::Boolean,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    IsNull,
    IsNotNull,
}

impl Operator {
    /// All known operators.
    pub const ALL: [Operator; 9] = [
        Operator::Eq,
        Operator::Neq,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::In,
        Operator::IsNull,
        Operator::IsNotNull,
    ];

    /// Returns the operator name as written in filter configurations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::In => "in",
            Operator::IsNull => "is_null",
            Operator::IsNotNull => "is_not_null",
        }
    }

    /// Returns true for `lt`, `lte`, `gt` and `gte`.
    pub fn is_ordered(&self) -> bool {
        matches!(
            self,
            Operator::Lt | Operator::Lte | Operator::Gt | Operator::Gte
        )
    }

    /// Returns true for operators that ignore the condition's value.
    pub fn is_presence_test(&self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or(())
    }
}
