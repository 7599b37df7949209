// In: src/tests/test_type_chart.rs

#[cfg(test)]
mod tests {
    use crate::{Effectiveness, PokemonType, TYPE_COUNT};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    const O: f32 = 0.0;
    const H: f32 = 0.5;
    const N: f32 = 1.0;
    const S: f32 = 2.0;

    // Rows: attacking type. Columns: defending type. Both in canonical order:
    // Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
    #[rustfmt::skip]
    const REFERENCE_CHART: [[f32; 18]; 18] = [
        /* Normal   */ [N, N, N, N, N, N, N, N, N, N, N, N, H, O, N, N, H, N],
        /* Fire     */ [N, H, H, N, S, S, N, N, N, N, N, S, H, N, H, N, S, N],
        /* Water    */ [N, S, H, N, H, N, N, N, S, N, N, N, S, N, H, N, N, N],
        /* Electric */ [N, N, S, H, H, N, N, N, O, S, N, N, N, N, H, N, N, N],
        /* Grass    */ [N, H, S, N, H, N, N, H, S, H, N, H, S, N, H, N, H, N],
        /* Ice      */ [N, H, H, N, S, H, N, N, S, S, N, N, N, N, S, N, H, N],
        /* Fighting */ [S, N, N, N, N, S, N, H, N, H, H, H, S, O, N, S, S, H],
        /* Poison   */ [N, N, N, N, S, N, N, H, H, N, N, N, H, H, N, N, O, S],
        /* Ground   */ [N, S, N, S, H, N, N, S, N, O, N, H, S, N, N, N, S, N],
        /* Flying   */ [N, N, N, H, S, N, S, N, N, N, N, S, H, N, N, N, H, N],
        /* Psychic  */ [N, N, N, N, N, N, S, S, N, N, H, N, N, N, N, O, H, N],
        /* Bug      */ [N, H, N, N, S, N, H, H, N, H, S, N, N, H, N, S, H, H],
        /* Rock     */ [N, S, N, N, N, S, H, N, H, S, N, S, N, N, N, N, H, N],
        /* Ghost    */ [O, N, N, N, N, N, N, N, N, N, S, N, N, S, N, H, N, N],
        /* Dragon   */ [N, N, N, N, N, N, N, N, N, N, N, N, N, N, S, N, H, O],
        /* Dark     */ [N, N, N, N, N, N, H, N, N, N, S, N, N, S, N, H, N, H],
        /* Steel    */ [N, H, H, H, N, S, N, N, N, N, N, N, S, N, N, N, H, S],
        /* Fairy    */ [N, H, N, N, N, N, S, H, N, N, N, N, N, N, S, S, H, N],
    ];

    #[test]
    fn test_chart_matches_reference_for_every_pair() {
        let types: Vec<PokemonType> = PokemonType::all().collect();
        assert_eq!(types.len(), TYPE_COUNT);

        for (row, &attacking) in types.iter().enumerate() {
            for (col, &defending) in types.iter().enumerate() {
                assert_eq!(
                    PokemonType::type_effectiveness(attacking, defending),
                    REFERENCE_CHART[row][col],
                    "{} attacking {}",
                    attacking,
                    defending
                );
            }
        }
    }

    #[test]
    fn test_chart_interaction_totals() {
        let mut immune = 0;
        let mut resisted = 0;
        let mut super_effective = 0;
        let mut neutral = 0;

        for attacking in PokemonType::all() {
            for defending in PokemonType::all() {
                match PokemonType::type_effectiveness(attacking, defending) {
                    m if m == 0.0 => immune += 1,
                    m if m == 0.5 => resisted += 1,
                    m if m == 1.0 => neutral += 1,
                    m if m == 2.0 => super_effective += 1,
                    m => panic!("{} vs {} produced {}", attacking, defending, m),
                }
            }
        }

        assert_eq!(immune, 8);
        assert_eq!(resisted, 61);
        assert_eq!(super_effective, 51);
        assert_eq!(neutral, 204);
    }

    #[rstest]
    #[case(PokemonType::Fire, PokemonType::Grass, 2.0)]
    #[case(PokemonType::Fire, PokemonType::Water, 0.5)]
    #[case(PokemonType::Normal, PokemonType::Ghost, 0.0)]
    #[case(PokemonType::Electric, PokemonType::Ground, 0.0)]
    #[case(PokemonType::Ground, PokemonType::Flying, 0.0)]
    #[case(PokemonType::Dragon, PokemonType::Fairy, 0.0)]
    #[case(PokemonType::Poison, PokemonType::Steel, 0.0)]
    #[case(PokemonType::Psychic, PokemonType::Dark, 0.0)]
    #[case(PokemonType::Steel, PokemonType::Fairy, 2.0)]
    #[case(PokemonType::Ghost, PokemonType::Dark, 0.5)]
    #[case(PokemonType::Water, PokemonType::Electric, 1.0)]
    fn test_known_lookups(
        #[case] attacking: PokemonType,
        #[case] defending: PokemonType,
        #[case] expected: f32,
    ) {
        assert_eq!(PokemonType::type_effectiveness(attacking, defending), expected);
    }

    #[test]
    fn test_is_immune() {
        assert!(PokemonType::is_immune(PokemonType::Normal, PokemonType::Ghost));
        assert!(PokemonType::is_immune(PokemonType::Ghost, PokemonType::Normal));
        assert!(!PokemonType::is_immune(PokemonType::Ghost, PokemonType::Ghost));
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<String> = PokemonType::all().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison",
                "Ground", "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel",
                "Fairy",
            ]
        );
        assert!(PokemonType::Normal < PokemonType::Fairy);
    }

    #[rstest]
    #[case("fire", PokemonType::Fire)]
    #[case("Fire", PokemonType::Fire)]
    #[case("FAIRY", PokemonType::Fairy)]
    fn test_parse_type_name(#[case] name: &str, #[case] expected: PokemonType) {
        assert_eq!(PokemonType::from_str(name).ok(), Some(expected));
    }

    #[test]
    fn test_parse_unknown_type_name() {
        assert!(PokemonType::from_str("Sound").is_err());
        assert!(PokemonType::from_str("").is_err());
    }

    #[test]
    fn test_category_from_multiplier() {
        for category in Effectiveness::all() {
            assert_eq!(
                Effectiveness::from_multiplier(category.multiplier()),
                Some(category)
            );
        }
        assert_eq!(Effectiveness::from_multiplier(8.0), None);
        assert_eq!(Effectiveness::from_multiplier(0.125), None);
        assert_eq!(Effectiveness::from_multiplier(1.5), None);
    }

    #[test]
    fn test_category_labels_and_flags() {
        assert_eq!(Effectiveness::DoubleWeak.label(), "4×");
        assert_eq!(Effectiveness::DoubleResist.to_string(), "Double Resist");
        assert!(Effectiveness::Weak.is_weakness());
        assert!(!Effectiveness::Immune.is_resistance());
        assert!(Effectiveness::DoubleResist.is_resistance());
        assert!(Effectiveness::Immune < Effectiveness::DoubleWeak);
    }
}
