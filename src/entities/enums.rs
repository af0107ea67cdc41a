//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};

// ********************* ENUMERAZIONI UTILI **********************//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Troll,
    Hobbit,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Race {
    /// Lenient parse for query parameters: anything that is not an exact
    /// wire name yields `None`, which downstream means "no filter".
    pub fn from_param(value: &str) -> Option<Race> {
        match value {
            "HUMAN" => Some(Race::Human),
            "DWARF" => Some(Race::Dwarf),
            "ELF" => Some(Race::Elf),
            "GIANT" => Some(Race::Giant),
            "TROLL" => Some(Race::Troll),
            "HOBBIT" => Some(Race::Hobbit),
            _ => None,
        }
    }
}

impl Profession {
    /// Lenient parse for query parameters, same contract as [`Race::from_param`].
    pub fn from_param(value: &str) -> Option<Profession> {
        match value {
            "WARRIOR" => Some(Profession::Warrior),
            "ROGUE" => Some(Profession::Rogue),
            "SORCERER" => Some(Profession::Sorcerer),
            "CLERIC" => Some(Profession::Cleric),
            "PALADIN" => Some(Profession::Paladin),
            "NAZGUL" => Some(Profession::Nazgul),
            "WARLOCK" => Some(Profession::Warlock),
            "DRUID" => Some(Profession::Druid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_from_param_is_exact_match() {
        assert_eq!(Race::from_param("HOBBIT"), Some(Race::Hobbit));
        assert_eq!(Race::from_param("hobbit"), None);
        assert_eq!(Race::from_param("INVALID_ENUM"), None);
        assert_eq!(Race::from_param(""), None);
    }

    #[test]
    fn profession_from_param_never_fails() {
        assert_eq!(Profession::from_param("NAZGUL"), Some(Profession::Nazgul));
        assert_eq!(Profession::from_param("BARBARIAN"), None);
    }

    #[test]
    fn enums_serialize_with_wire_names() {
        assert_eq!(serde_json::to_string(&Race::Troll).unwrap(), "\"TROLL\"");
        assert_eq!(
            serde_json::to_string(&Profession::Warlock).unwrap(),
            "\"WARLOCK\""
        );
    }
}
