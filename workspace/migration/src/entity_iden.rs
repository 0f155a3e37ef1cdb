//! Identifiers derived from the SeaORM entities, so data migrations can
//! address tables and columns without repeating their names as strings.

use model::entities::prelude::*;
use sea_orm::entity::prelude::*;
use sea_orm::Iden;

/// Table and column identifiers for an entity.
pub trait EntityIden: EntityTrait {
    /// Identifier of the entity's table.
    fn table() -> NameIden {
        NameIden(Self::default().table_name().to_string())
    }

    /// Identifiers of the given columns, in order.
    fn columns<C, I>(columns: I) -> Vec<NameIden>
    where
        C: ColumnTrait + Iden,
        I: IntoIterator<Item = C>,
    {
        columns
            .into_iter()
            .map(|column| {
                let mut name = String::new();
                column.unquoted(&mut name);
                NameIden(name)
            })
            .collect()
    }
}

impl EntityIden for Account {}
impl EntityIden for Hero {}
impl EntityIden for MatchRecord {}

/// An owned table or column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIden(String);

impl Iden for NameIden {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = s.write_str(&self.0);
    }
}
