use crate::model::lookup::LookupDto;

/// Category or game server, used both as a queue filter and an analytics grouping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub id: i32,
    pub name: String,
}

impl Lookup {
    pub fn into_dto(self) -> LookupDto {
        LookupDto {
            id: self.id,
            name: self.name,
        }
    }
}

impl From<entity::category::Model> for Lookup {
    fn from(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<entity::server::Model> for Lookup {
    fn from(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
