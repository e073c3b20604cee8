/// Minimum confidence (0-100) required to accept a food match.
pub const MATCH_THRESHOLD: f64 = 50.0;

/// Confidence reported for an exact match.
pub const EXACT_CONFIDENCE: f64 = 100.0;

/// Component awarded to every food, since every record carries a calorie total.
pub const ENERGY_COMPONENT: &str = "Energy (kcal)";

/// Number of missing components surfaced as improvement suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Explanation bands (inclusive lower bounds, in percent)
// ─────────────────────────────────────────────────────────────────────────────

pub const EXCELLENT_THRESHOLD: f64 = 70.0;
pub const GOOD_THRESHOLD: f64 = 50.0;
pub const IMPROVABLE_THRESHOLD: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Category aliases
// ─────────────────────────────────────────────────────────────────────────────

/// Lower-cased category variant -> canonical component label.
///
/// "dairy" and "low-fat dairy" are intentionally left unlinked.
pub const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("vegetables", "other vegetables"),
    ("leafy vegetables", "green leafy vegetables"),
    ("beans", "beans & legumes"),
    ("legumes", "beans & legumes"),
    ("processed meat", "red & processed meat"),
    ("red meat", "red & processed meat"),
    ("fried foods", "fast and fried foods"),
    ("desserts", "sweets and desserts"),
    ("sweets", "sweets and desserts"),
    ("margarine", "butter & stick margarine"),
    ("butter", "butter & stick margarine"),
    ("cheese", "regular cheese"),
    ("refined grain", "refined grains"),
    ("whole grain", "whole grains"),
    ("fruit juice", "fruit juices"),
    ("sweetened beverages", "sugar sweetened beverages"),
    ("poultry", "poultry (not fried, skinless)"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Built-in dietary indices
// ─────────────────────────────────────────────────────────────────────────────

/// Static definition of a built-in index. Every component weighs one point.
pub struct IndexSpec {
    pub name: &'static str,
    pub components: &'static [&'static str],
    pub max_score: u32,
    pub description: &'static str,
}

/// Labels whose presence counts against a food, across all built-in indices.
pub const REVERSE_SCORED_COMPONENTS: &[&str] = &[
    "sugar sweetened beverages",
    "red & processed meat",
    "trans fat",
    "fast and fried foods",
    "pastries and sweets",
    "butter & stick margarine",
    "regular cheese",
    "sweets and desserts",
    "Sodium",
    "Refined grains",
    "fruit juices",
    "dairy",
    "egg",
    "animal fat",
];

pub const STANDARD_INDICES: &[IndexSpec] = &[
    IndexSpec {
        name: "AHEI-2010",
        components: &[
            "other vegetables",
            "Fruit",
            "Whole Grains",
            "sugar sweetened beverages",
            "nuts",
            "fish",
            "red & processed meat",
            "poultry (not fried, skinless)",
            "dairy",
            "alcohol",
            "vegetable oils",
            "trans fat",
            "n-3 fats",
            "PUFA",
        ],
        max_score: 11,
        description: "Alternative Healthy Eating Index - focuses on foods and nutrients that reduce chronic disease risk",
    },
    IndexSpec {
        name: "aMED",
        components: &[
            "other vegetables",
            "Fruit",
            "Whole Grains",
            "legumes",
            "nuts",
            "fish",
            "red & processed meat",
            "olive oil",
            "alcohol",
            "ratio of monounsaturated to saturated fat",
        ],
        max_score: 9,
        description: "Alternative Mediterranean Diet - emphasizes traditional Mediterranean eating patterns",
    },
    IndexSpec {
        name: "MIND",
        components: &[
            "green leafy vegetables",
            "other vegetables",
            "Fruit",
            "Berries",
            "Whole Grains",
            "nuts",
            "beans & legumes",
            "fish",
            "poultry (not fried, skinless)",
            "olive oil",
            "red & processed meat",
            "fast and fried foods",
            "pastries and sweets",
            "butter & stick margarine",
            "regular cheese",
        ],
        max_score: 15,
        description: "Mediterranean-DASH Intervention for Neurodegenerative Delay - designed to promote brain health",
    },
    IndexSpec {
        name: "DASH",
        components: &[
            "other vegetables",
            "Fruit",
            "Whole Grains",
            "nuts",
            "legumes",
            "low-fat dairy",
            "red & processed meat",
            "sweets and desserts",
            "Sodium",
        ],
        max_score: 8,
        description: "Dietary Approaches to Stop Hypertension - designed to help lower blood pressure",
    },
    IndexSpec {
        name: "PDI",
        components: &[
            "other vegetables",
            "Vegetables",
            "Fruit",
            "Berries",
            "Whole Grains",
            "Refined grains",
            "sugar sweetened beverages",
            "fruit juices",
            "nuts",
            "legumes",
            "fish",
            "dairy",
            "egg",
            "red & processed meat",
            "poultry (not fried, skinless)",
            "fast and fried foods",
            "sweets and desserts",
            "animal fat",
        ],
        max_score: 18,
        description: "Plant-based Diet Index - emphasizes plant foods while limiting animal products",
    },
    IndexSpec {
        name: "DII",
        components: &[
            "Garlic (g)",
            "Pepper (g)",
            "Thyme/oregano (mg)",
            "Rosemary (mg)",
            "Green/black tea (g)",
            "Ginger (g)",
            "Onion (g)",
            "Saffron (g)",
            "Turmeric (mg)",
            "Sodium",
            "trans fat",
            "n-3 fats",
            "PUFA",
            "Total fat (g)",
            "Cholesterol (mg)",
            "MUFA (g)",
            "n-6 Fatty acids (g)",
            "Saturated fat (g)",
            "Fibre (g)",
            "Energy (kcal)",
            "Protein (g)",
            "Carbohydrate (g)",
            "Caffeine (g)",
            "β-Carotene (μg)",
            "Eugenol (mg)",
            "Folic acid (μg)",
            "Fe (mg)",
            "Mg (mg)",
            "Niacin (mg)",
            "Riboflavin (mg)",
            "Se (μg)",
            "Thiamin (mg)",
            "Zn (mg)",
            "Vitamin B12 (μg)",
            "Vitamin B6 (mg)",
            "Vitamin A (RE)",
            "Vitamin C (mg)",
            "Vitamin D (μg)",
            "Vitamin E (mg)",
            "Anthocyanidins (mg)",
            "Flavan-3-ol (mg)",
            "Flavones (mg)",
            "Flavonols (mg)",
            "Flavonones (mg)",
            "Isoflavones (mg)",
        ],
        max_score: 45,
        description: "Dietary Inflammatory Index - measures the inflammatory potential of your diet",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Explanation text
// ─────────────────────────────────────────────────────────────────────────────

/// Why a favorable component helps.
pub const POSITIVE_RATIONALES: &[(&str, &str)] = &[
    ("other vegetables", "vegetables provide essential vitamins, minerals, and fiber"),
    ("Fruit", "fruits are rich in antioxidants, vitamins, and natural fiber"),
    ("Whole Grains", "whole grains provide sustained energy and important nutrients"),
    ("nuts", "nuts contain healthy fats, protein, and various micronutrients"),
    ("fish", "fish provides omega-3 fatty acids that support heart and brain health"),
    ("green leafy vegetables", "leafy greens are packed with folate, iron, and antioxidants"),
    ("Berries", "berries are high in antioxidants and may support brain health"),
    ("beans & legumes", "legumes provide plant protein, fiber, and important minerals"),
    ("poultry (not fried, skinless)", "lean poultry provides high-quality protein"),
    ("olive oil", "olive oil contains healthy monounsaturated fats"),
    ("low-fat dairy", "low-fat dairy provides calcium and protein with less saturated fat"),
    ("legumes", "legumes offer plant protein, fiber, and various nutrients"),
    ("vegetable oils", "certain vegetable oils provide healthy unsaturated fats"),
    ("n-3 fats", "omega-3 fatty acids support heart and brain health"),
    ("PUFA", "polyunsaturated fats can help reduce inflammation"),
    ("alcohol", "moderate alcohol consumption may have some health benefits"),
    ("ratio of monounsaturated to saturated fat", "higher ratio indicates healthier fat profile"),
    ("Vegetables", "vegetables provide essential nutrients and protective compounds"),
    ("Onion (g)", "onions contain anti-inflammatory compounds"),
    ("Garlic (g)", "garlic has anti-inflammatory and antimicrobial properties"),
    ("Pepper (g)", "peppers contain antioxidants and anti-inflammatory compounds"),
    ("Thyme/oregano (mg)", "herbs like thyme and oregano have anti-inflammatory properties"),
    ("Rosemary (mg)", "rosemary contains powerful antioxidants"),
    ("Green/black tea (g)", "tea provides antioxidants and anti-inflammatory compounds"),
    ("Ginger (g)", "ginger has strong anti-inflammatory effects"),
    ("Saffron (g)", "saffron contains antioxidants and may support mood"),
    ("Turmeric (mg)", "turmeric contains curcumin, a powerful anti-inflammatory compound"),
    ("Fibre (g)", "fiber supports digestive health and may reduce inflammation"),
    ("β-Carotene (μg)", "beta-carotene is an antioxidant that converts to vitamin A"),
    ("Eugenol (mg)", "eugenol has anti-inflammatory and antioxidant properties"),
    ("Folic acid (μg)", "folate supports cell division and may reduce inflammation"),
    ("Mg (mg)", "magnesium supports many bodily functions and may reduce inflammation"),
    ("Niacin (mg)", "niacin (vitamin B3) supports energy metabolism"),
    ("Riboflavin (mg)", "riboflavin (vitamin B2) supports cellular energy production"),
    ("Thiamin (mg)", "thiamin (vitamin B1) supports nervous system function"),
    ("Vitamin B12 (μg)", "vitamin B12 supports nerve function and red blood cell formation"),
    ("Vitamin B6 (mg)", "vitamin B6 supports brain function and immune system"),
    ("Vitamin A (RE)", "vitamin A supports vision, immune function, and cell growth"),
    ("Vitamin C (mg)", "vitamin C is a powerful antioxidant that supports immune function"),
    ("Vitamin D (μg)", "vitamin D supports bone health and immune function"),
    ("Vitamin E (mg)", "vitamin E is an antioxidant that protects cells from damage"),
    ("Anthocyanidins (mg)", "anthocyanidins are antioxidants that give fruits their color"),
    ("Flavan-3-ol (mg)", "flavan-3-ols are antioxidants found in tea, cocoa, and fruits"),
    ("Flavones (mg)", "flavones are plant compounds with anti-inflammatory effects"),
    ("Flavonols (mg)", "flavonols are antioxidants found in many fruits and vegetables"),
    ("Flavonones (mg)", "flavonones are citrus compounds with anti-inflammatory properties"),
    ("Isoflavones (mg)", "isoflavones are plant compounds with potential health benefits"),
];

/// Why a reverse-scored component is a concern.
pub const NEGATIVE_RATIONALES: &[(&str, &str)] = &[
    ("sugar sweetened beverages", "sugary drinks can lead to weight gain and increased diabetes risk"),
    ("red & processed meat", "high consumption may increase risk of heart disease and certain cancers"),
    ("trans fat", "trans fats raise bad cholesterol and increase heart disease risk"),
    ("fast and fried foods", "these foods are often high in unhealthy fats and calories"),
    ("pastries and sweets", "high sugar content can lead to blood sugar spikes and weight gain"),
    ("butter & stick margarine", "these fats are high in saturated fat which can raise cholesterol"),
    ("regular cheese", "high-fat cheese can contribute to saturated fat intake"),
    ("sweets and desserts", "high sugar content provides empty calories and can affect blood sugar"),
    ("Sodium", "excess sodium can contribute to high blood pressure"),
    ("Refined grains", "refined grains lack fiber and nutrients compared to whole grains"),
    ("fruit juices", "fruit juices are high in sugar and lack the fiber of whole fruits"),
    ("dairy", "in some diet indices, dairy is limited to emphasize plant-based foods"),
    ("egg", "in plant-based indices, eggs are limited as they're animal products"),
    ("animal fat", "animal fats are typically higher in saturated fat"),
];
