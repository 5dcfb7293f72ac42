#[cfg(test)]
mod tests {
    use recipe_matcher::normalizer::{new_normalizer, IngredientNormalizer, RuleBasedNormalizer};
    use recipe_matcher::staples::is_pantry_staple;
    use recipe_matcher::substitutions::SubstitutionIndex;

    fn create_normalizer() -> RuleBasedNormalizer {
        RuleBasedNormalizer::new()
    }

    #[test]
    fn test_basic_normalization() {
        let normalizer = create_normalizer();
        let cases = vec![
            ("flour", "flour"),
            ("2 cups flour", "flour"),
            ("1/2 cup sugar", "sugar"),
            ("½ cup milk", "milk"),
            ("1 ½ cups milk", "milk"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalizer.normalize(input),
                expected,
                "Normalization failed for: '{}'",
                input
            );
        }
    }

    #[test]
    fn test_unit_removal() {
        let normalizer = create_normalizer();
        let cases = vec![
            ("2 tbsp olive oil", "olive oil"),
            ("1 tsp salt", "salt"),
            ("500g chicken breast", "chicken breast"),
            ("8 oz cream cheese", "cream cheese"),
            ("2 lbs ground beef", "beef"),
            ("250ml water", "water"),
            ("3 cloves garlic", "garlic"),
            ("1 pinch nutmeg", "nutmeg"),
            ("2 sprigs rosemary", "rosemary"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalizer.normalize(input),
                expected,
                "Unit removal failed for: '{}'",
                input
            );
        }
    }

    #[test]
    fn test_preparation_word_removal() {
        let normalizer = create_normalizer();
        let cases = vec![
            ("chopped onion", "onion"),
            ("minced garlic", "garlic"),
            ("diced tomatoes", "tomato"),
            ("thinly sliced carrots", "thinly carrot"),
            ("fresh basil", "basil"),
            ("dried oregano", "oregano"),
            ("grated parmesan", "parmesan"),
            ("freshly chopped parsley", "parsley"),
            ("finely minced ginger", "ginger"),
            ("parsley for garnish", "parsley"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalizer.normalize(input),
                expected,
                "Preparation word removal failed for: '{}'",
                input
            );
        }
    }

    #[test]
    fn test_trailing_notes() {
        let normalizer = create_normalizer();

        assert_eq!(normalizer.normalize("butter (room temperature)"), "butter");
        assert_eq!(normalizer.normalize("cilantro (optional)"), "cilantro");
        assert_eq!(normalizer.normalize("salt, to taste"), "salt");
        assert_eq!(normalizer.normalize("pepper; freshly ground"), "pepper");
    }

    #[test]
    fn test_depluralization() {
        let normalizer = create_normalizer();

        assert_eq!(normalizer.normalize("tomatoes"), "tomato");
        assert_eq!(normalizer.normalize("berries"), "berry");
        assert_eq!(normalizer.normalize("leaves"), "leaf");
        assert_eq!(normalizer.normalize("carrots"), "carrot");
        assert_eq!(normalizer.normalize("chicken"), "chicken");
        assert_eq!(normalizer.normalize("as"), "as");
    }

    #[test]
    fn test_edge_cases() {
        let normalizer = create_normalizer();

        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   "), "");
        assert_eq!(normalizer.normalize("  flour  "), "flour");
        assert_eq!(normalizer.normalize("OLIVE OIL"), "olive oil");
        assert_eq!(normalizer.normalize("2 cups"), "cup");
        assert_eq!(normalizer.normalize("chopped"), "");
    }

    #[test]
    fn test_full_ingredient_lines() {
        let normalizer = create_normalizer();

        assert_eq!(
            normalizer.normalize("2 cups all-purpose flour, sifted"),
            "all-purpose flour"
        );
        assert_eq!(
            normalizer.normalize("1 lb boneless skinless chicken breast, cut into cubes"),
            "boneless skinless chicken breast"
        );
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical_output() {
        let normalizer = create_normalizer();
        let inputs = vec![
            "2 cups all-purpose flour, sifted",
            "diced tomatoes",
            "berries",
            "leaves",
            "3 cloves garlic",
            "butter (room temperature)",
            "1 lb boneless skinless chicken breast, cut into cubes",
            "2 tbsp olive oil",
            "Fresh Basil Leaves",
            "2 tbsp molasses",
            "lemongrass",
            "watercress",
            "cheeses",
            "2 cups grated cheeses",
            "3 peaches, sliced",
            "hummus",
        ];

        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "Normalization not idempotent for: '{}'", input);
        }
    }

    #[test]
    fn test_plural_edge_words() {
        let normalizer = create_normalizer();
        let cases = vec![
            ("cheeses", "cheese"),
            ("glasses", "glass"),
            ("peaches", "peach"),
            ("sausages", "sausage"),
            ("molasses", "molass"),
            ("lemongrass", "lemongrass"),
            ("watercress", "watercress"),
            ("asparagus", "asparagus"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalizer.normalize(input),
                expected,
                "Depluralization failed for: '{}'",
                input
            );
        }
    }

    #[test]
    fn test_are_similar() {
        let normalizer = create_normalizer();
        let cases = vec![
            // Exact matches after normalization
            ("flour", "flour", true),
            ("Flour", "flour", true),
            ("2 cups flour", "flour", true),
            // Substitution groups
            ("milk", "cream", true),
            ("milk", "heavy cream", true),
            ("butter", "margarine", true),
            ("unsalted butter", "butter", true),
            ("parmesan", "romano", true),
            ("parmesan", "pecorino", true),
            ("spaghetti", "linguine", true),
            ("pasta", "penne", true),
            ("olive oil", "vegetable oil", true),
            ("garlic", "garlic cloves", true),
            ("onion", "shallot", true),
            ("tomato", "cherry tomatoes", true),
            ("chicken broth", "vegetable stock", true),
            ("sour cream", "greek yogurt", true),
            ("breadcrumbs", "panko breadcrumbs", true),
            ("ground beef", "ground turkey", true),
            ("ground beef", "ground pork", true),
            ("bread crumbs", "panko", true),
            ("breadcrumbs", "panko breadcrumbs", true),
            ("roma tomatoes", "cherry tomatoes", true),
            ("whole milk", "half-and-half", true),
            ("fresh oregano", "dried oregano", true),
            // Containment
            ("chicken breast", "chicken", true),
            ("chicken", "chicken thigh", true),
            // Not similar
            ("flour", "sugar", false),
            ("chicken", "fish", false),
            ("milk", "olive oil", false),
        ];

        for (a, b, expected) in cases {
            assert_eq!(
                normalizer.are_similar(a, b),
                expected,
                "are_similar('{}', '{}') should be {}",
                a,
                b,
                expected
            );
            assert_eq!(
                normalizer.are_similar(b, a),
                expected,
                "are_similar should be symmetric for '{}' and '{}'",
                a,
                b
            );
        }
    }

    #[test]
    fn test_custom_substitution_index() {
        let table: &[&[&str]] = &[&["tofu", "tempeh", "seitan"]];
        let normalizer = RuleBasedNormalizer::with_substitutions(SubstitutionIndex::from_groups(table));

        assert!(normalizer.are_similar("tofu", "seitan"));
        assert!(!normalizer.are_similar("milk", "cream"));
    }

    #[test]
    fn test_shared_normalizer_through_trait_object() {
        let normalizer = new_normalizer();

        assert_eq!(normalizer.normalize("3 cloves garlic"), "garlic");
        assert!(normalizer.are_similar("spaghetti", "penne"));
    }

    #[test]
    fn test_is_pantry_staple() {
        let cases = vec![
            ("salt", true),
            ("pepper", true),
            ("black pepper", true),
            ("olive oil", true),
            ("vegetable oil", true),
            ("water", true),
            ("sugar", true),
            ("flour", true),
            ("all-purpose flour", true),
            ("butter", true),
            ("garlic powder", true),
            ("baking soda", true),
            ("baking powder", true),
            ("1 tsp salt", true),
            ("freshly ground pepper", true),
            ("2 cups all-purpose flour, sifted", true),
            ("chicken", false),
            ("tomatoes", false),
            ("cheese", false),
            ("pasta", false),
            ("onion", false),
            ("", false),
        ];

        for (ingredient, expected) in cases {
            assert_eq!(
                is_pantry_staple(ingredient),
                expected,
                "is_pantry_staple('{}') should be {}",
                ingredient,
                expected
            );
        }
    }
}
