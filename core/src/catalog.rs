use herocraft_common::hero::{Character, CharacterKind};

/// Looks up the unupgraded character for `kind`.
pub fn base_character(kind: CharacterKind) -> Character {
    Character::new(kind.label(), kind.base_power())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_exact() {
        assert_eq!(base_character(CharacterKind::Warrior), Character::new("🏆 Warrior", 100));
        assert_eq!(base_character(CharacterKind::Archer), Character::new("\u{1F3F9} Archer", 80));
        assert_eq!(base_character(CharacterKind::Mage), Character::new("\u{1F9DD}\u{FE0F} Mage", 70));
    }

    #[test]
    fn powers_do_not_depend_on_call_order() {
        let forward: Vec<u32> = CharacterKind::ALL
            .iter()
            .map(|kind| base_character(*kind).power)
            .collect();
        let backward: Vec<u32> = CharacterKind::ALL
            .iter()
            .rev()
            .map(|kind| base_character(*kind).power)
            .collect();

        assert_eq!(forward, vec![100, 80, 70]);
        assert_eq!(backward, vec![70, 80, 100]);
    }

    #[test]
    fn repeated_lookups_are_equal() {
        for kind in CharacterKind::ALL {
            assert_eq!(base_character(kind), base_character(kind));
        }
    }
}
