//! The built-in tables.
//!
//! Staple crops come first, then named cultivars grouped by crop. Table order
//! is the order `list_vegetables` and not-found listings render in.

use crate::plant::{PlantRecord, Variety};
use crate::zone::ZoneRecord;

pub(crate) static PLANTS: &[(&str, PlantRecord)] = &[
    (
        "tomato",
        PlantRecord {
            name: "Tomato",
            planting_depth: "0.25 inches",
            spacing: "24-36 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "60-85 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun (6-8 hours)",
            watering_needs: "Regular, deep watering - 1-2 inches per week",
            companions: &["basil", "carrots", "onions", "marigold"],
            avoid: &["cabbage", "fennel", "potato"],
            common_pests: &["hornworms", "aphids", "whiteflies"],
            tips: "Stake or cage plants for support. Mulch to retain moisture and prevent disease.",
            variety: None,
        },
    ),
    (
        "lettuce",
        PlantRecord {
            name: "Lettuce",
            planting_depth: "0.25 inches",
            spacing: "6-12 inches",
            days_to_germination: "2-7 days",
            days_to_harvest: "30-60 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Partial shade to full sun",
            watering_needs: "Frequent, light watering to keep soil moist",
            companions: &["carrots", "radish", "strawberries"],
            avoid: &["broccoli", "cabbage"],
            common_pests: &["aphids", "slugs", "snails"],
            tips: "Grows best in cool weather. Succession plant every 2 weeks for continuous harvest.",
            variety: None,
        },
    ),
    (
        "carrot",
        PlantRecord {
            name: "Carrot",
            planting_depth: "0.25-0.5 inches",
            spacing: "2-3 inches",
            days_to_germination: "10-21 days",
            days_to_harvest: "50-80 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, 1 inch per week",
            companions: &["onions", "leeks", "rosemary", "sage"],
            avoid: &["dill", "parsnip"],
            common_pests: &["carrot rust fly", "wireworms"],
            tips: "Needs loose, well-drained soil. Thin seedlings to prevent crowding.",
            variety: None,
        },
    ),
    (
        "pepper",
        PlantRecord {
            name: "Pepper",
            planting_depth: "0.25 inches",
            spacing: "18-24 inches",
            days_to_germination: "8-25 days",
            days_to_harvest: "60-90 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, keep soil evenly moist",
            companions: &["basil", "onions", "tomatoes"],
            avoid: &["fennel", "beans"],
            common_pests: &["aphids", "flea beetles", "hornworms"],
            tips: "Start seeds indoors 8-10 weeks before last frost. Support heavy plants with stakes.",
            variety: None,
        },
    ),
    (
        "cucumber",
        PlantRecord {
            name: "Cucumber",
            planting_depth: "0.5-1 inch",
            spacing: "12-24 inches",
            days_to_germination: "3-10 days",
            days_to_harvest: "50-70 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular, deep watering - 1-2 inches per week",
            companions: &["beans", "corn", "radish", "sunflower"],
            avoid: &["aromatic herbs", "potato"],
            common_pests: &["cucumber beetles", "aphids", "spider mites"],
            tips: "Provide trellis for vining varieties. Pick frequently to encourage production.",
            variety: None,
        },
    ),
    (
        "basil",
        PlantRecord {
            name: "Basil",
            planting_depth: "0.25 inches",
            spacing: "10-12 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "40-60 days",
            soil_ph: "6.0-7.5",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, keep soil moist but not waterlogged",
            companions: &["tomatoes", "peppers", "oregano"],
            avoid: &["rue", "sage"],
            common_pests: &["aphids", "japanese beetles", "slugs"],
            tips: "Pinch off flower buds to encourage leaf growth. Harvest regularly for bushier plants.",
            variety: None,
        },
    ),
    (
        "zucchini",
        PlantRecord {
            name: "Zucchini",
            planting_depth: "1 inch",
            spacing: "24-36 inches",
            days_to_germination: "4-8 days",
            days_to_harvest: "45-55 days",
            soil_ph: "6.0-7.5",
            sun_requirement: "Full sun",
            watering_needs: "Deep watering - 1-2 inches per week",
            companions: &["corn", "beans", "peas", "radish"],
            avoid: &["potato"],
            common_pests: &["squash bugs", "vine borers", "cucumber beetles"],
            tips: "Harvest when 6-8 inches long for best flavor. Check plants daily during peak season.",
            variety: None,
        },
    ),
    // Tomato varieties
    (
        "black_krim_tomato",
        PlantRecord {
            name: "Black Krim Tomato",
            planting_depth: "0.25 inches",
            spacing: "24-36 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "75-85 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun (6-8 hours)",
            watering_needs: "Regular, deep watering - 1-2 inches per week",
            companions: &["basil", "carrots", "onions", "marigold", "parsley"],
            avoid: &["cabbage", "fennel", "potato", "corn"],
            common_pests: &["hornworms", "aphids", "whiteflies", "blossom end rot"],
            tips: "Indeterminate variety. Rich, complex flavor with smoky undertones. Excellent for slicing.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Crimea, Ukraine",
                fruit_size: "Large (8-12 oz)",
                fruit_color: "Dark purple-red",
                heat_level: None,
                growth_habit: "Indeterminate",
            }),
        },
    ),
    (
        "brandywine_tomato",
        PlantRecord {
            name: "Brandywine Tomato",
            planting_depth: "0.25 inches",
            spacing: "36 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "80-90 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun (6-8 hours)",
            watering_needs: "Deep watering twice weekly",
            companions: &["basil", "borage", "nasturtium", "marigold"],
            avoid: &["cabbage family", "fennel", "potato"],
            common_pests: &["hornworms", "aphids", "blossom end rot"],
            tips: "The gold standard of heirloom tomatoes. Prone to cracking - consistent watering is key.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Chester County, Pennsylvania (1885)",
                fruit_size: "Very Large (1-2 lbs)",
                fruit_color: "Pink-red",
                heat_level: None,
                growth_habit: "Indeterminate",
            }),
        },
    ),
    (
        "green_zebra_tomato",
        PlantRecord {
            name: "Green Zebra Tomato",
            planting_depth: "0.25 inches",
            spacing: "24-30 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "75-80 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, avoid overwatering",
            companions: &["basil", "oregano", "marigold", "nasturtium"],
            avoid: &["cabbage", "fennel", "potato"],
            common_pests: &["hornworms", "aphids", "whiteflies"],
            tips: "Tart, tangy flavor. Great for salads and salsas. Striking appearance when ripe.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Developed by Tom Wagner (1983)",
                fruit_size: "Medium (3-4 oz)",
                fruit_color: "Green with yellow stripes",
                heat_level: None,
                growth_habit: "Indeterminate",
            }),
        },
    ),
    (
        "cherokee_purple_tomato",
        PlantRecord {
            name: "Cherokee Purple Tomato",
            planting_depth: "0.25 inches",
            spacing: "36 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "80-90 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Deep, consistent watering",
            companions: &["basil", "parsley", "marigold", "borage"],
            avoid: &["cabbage family", "fennel", "corn"],
            common_pests: &["hornworms", "aphids", "blossom end rot"],
            tips: "Rich, smoky flavor. Excellent for fresh eating. Needs good air circulation.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Tennessee (100+ years old)",
                fruit_size: "Large (10-12 oz)",
                fruit_color: "Dark purple-red",
                heat_level: None,
                growth_habit: "Indeterminate",
            }),
        },
    ),
    (
        "yellow_pear_tomato",
        PlantRecord {
            name: "Yellow Pear Tomato",
            planting_depth: "0.25 inches",
            spacing: "24 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "75-80 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["basil", "marigold", "nasturtium"],
            avoid: &["cabbage", "fennel", "potato"],
            common_pests: &["hornworms", "aphids", "whiteflies"],
            tips: "Small, sweet cherry tomatoes. Prolific producer. Great for salads and snacking.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Europe (1700s)",
                fruit_size: "Small (1-2 oz)",
                fruit_color: "Bright yellow",
                heat_level: None,
                growth_habit: "Indeterminate",
            }),
        },
    ),
    // Lettuce varieties
    (
        "buttercrunch_lettuce",
        PlantRecord {
            name: "Buttercrunch Lettuce",
            planting_depth: "0.25 inches",
            spacing: "8-12 inches",
            days_to_germination: "2-7 days",
            days_to_harvest: "55-65 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Partial shade in hot climates",
            watering_needs: "Frequent, light watering to keep soil moist",
            companions: &["carrots", "radish", "strawberries", "chives"],
            avoid: &["broccoli", "cabbage", "cauliflower"],
            common_pests: &["aphids", "slugs", "snails", "leaf miners"],
            tips: "Forms loose head. Heat tolerant. Succession plant every 2 weeks.",
            variety: Some(Variety {
                cultivar_type: "Butterhead",
                origin: "Developed by Cornell University",
                fruit_size: "Medium head (6-8 inches)",
                fruit_color: "Light green outer, yellow-green center",
                heat_level: None,
                growth_habit: "Head forming",
            }),
        },
    ),
    (
        "red_sails_lettuce",
        PlantRecord {
            name: "Red Sails Lettuce",
            planting_depth: "0.25 inches",
            spacing: "6-8 inches",
            days_to_germination: "2-7 days",
            days_to_harvest: "45-55 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun to partial shade",
            watering_needs: "Keep soil consistently moist",
            companions: &["radish", "spinach", "arugula", "herbs"],
            avoid: &["brassicas", "alliums"],
            common_pests: &["aphids", "slugs", "snails"],
            tips: "Cut-and-come-again variety. Beautiful red-tinted leaves. Heat tolerant.",
            variety: Some(Variety {
                cultivar_type: "Leaf Lettuce",
                origin: "Hybrid variety",
                fruit_size: "Loose leaf",
                fruit_color: "Red and green mixed",
                heat_level: None,
                growth_habit: "Leafy",
            }),
        },
    ),
    (
        "romaine_lettuce",
        PlantRecord {
            name: "Romaine Lettuce",
            planting_depth: "0.25 inches",
            spacing: "8-12 inches",
            days_to_germination: "2-7 days",
            days_to_harvest: "65-75 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, 1 inch per week",
            companions: &["carrots", "radish", "onions", "garlic"],
            avoid: &["cabbage family", "broccoli"],
            common_pests: &["aphids", "slugs", "snails"],
            tips: "Upright growth habit. Crisp texture. Great for Caesar salads.",
            variety: Some(Variety {
                cultivar_type: "Cos Lettuce",
                origin: "Mediterranean region",
                fruit_size: "Tall head (10-12 inches)",
                fruit_color: "Dark green",
                heat_level: None,
                growth_habit: "Upright head",
            }),
        },
    ),
    // Carrot varieties
    (
        "dragon_carrot",
        PlantRecord {
            name: "Dragon Carrot",
            planting_depth: "0.25-0.5 inches",
            spacing: "2-3 inches",
            days_to_germination: "10-21 days",
            days_to_harvest: "65-75 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, 1 inch per week",
            companions: &["onions", "leeks", "rosemary", "sage", "chives"],
            avoid: &["dill", "parsnip", "fennel"],
            common_pests: &["carrot rust fly", "wireworms", "nematodes"],
            tips: "Purple skin with orange interior. Sweet, spicy flavor. Needs loose soil.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "China",
                fruit_size: "Medium (6-8 inches)",
                fruit_color: "Purple skin, orange flesh",
                heat_level: None,
                growth_habit: "Root vegetable",
            }),
        },
    ),
    (
        "atomic_red_carrot",
        PlantRecord {
            name: "Atomic Red Carrot",
            planting_depth: "0.25-0.5 inches",
            spacing: "2-3 inches",
            days_to_germination: "10-21 days",
            days_to_harvest: "70-80 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Consistent moisture",
            companions: &["onions", "leeks", "parsley", "marigold"],
            avoid: &["dill", "parsnip"],
            common_pests: &["carrot rust fly", "wireworms"],
            tips: "Vibrant red color throughout. High in lycopene. Excellent for juicing.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Turkey",
                fruit_size: "Medium (7-9 inches)",
                fruit_color: "Deep red",
                heat_level: None,
                growth_habit: "Root vegetable",
            }),
        },
    ),
    (
        "purple_haze_carrot",
        PlantRecord {
            name: "Purple Haze Carrot",
            planting_depth: "0.25-0.5 inches",
            spacing: "2-3 inches",
            days_to_germination: "10-21 days",
            days_to_harvest: "65-75 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["onions", "chives", "rosemary", "marigold"],
            avoid: &["dill", "parsnip", "fennel"],
            common_pests: &["carrot rust fly", "wireworms"],
            tips: "Purple skin, orange core. Sweet flavor. Good storage qualities.",
            variety: Some(Variety {
                cultivar_type: "Hybrid",
                origin: "Modern hybrid",
                fruit_size: "Medium (6-8 inches)",
                fruit_color: "Purple skin, orange flesh",
                heat_level: None,
                growth_habit: "Root vegetable",
            }),
        },
    ),
    (
        "white_satin_carrot",
        PlantRecord {
            name: "White Satin Carrot",
            planting_depth: "0.25-0.5 inches",
            spacing: "2-3 inches",
            days_to_germination: "10-21 days",
            days_to_harvest: "65-75 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["onions", "leeks", "rosemary", "sage"],
            avoid: &["dill", "parsnip"],
            common_pests: &["carrot rust fly", "wireworms"],
            tips: "Pure white color. Mild, sweet flavor. Excellent for soups and roasting.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Europe",
                fruit_size: "Medium (6-8 inches)",
                fruit_color: "White",
                heat_level: None,
                growth_habit: "Root vegetable",
            }),
        },
    ),
    // Pepper varieties
    (
        "chocolate_habanero",
        PlantRecord {
            name: "Chocolate Habanero",
            planting_depth: "0.25 inches",
            spacing: "18-24 inches",
            days_to_germination: "7-14 days",
            days_to_harvest: "90-100 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, allow soil to dry between waterings",
            companions: &["basil", "marjoram", "oregano", "marigold"],
            avoid: &["fennel", "kohlrabi", "brassicas"],
            common_pests: &["aphids", "thrips", "whiteflies", "pepper maggots"],
            tips: "Extremely hot (300,000-400,000 SHU). Rich, smoky flavor. Wear gloves when handling.",
            variety: Some(Variety {
                cultivar_type: "Hot Pepper",
                origin: "Caribbean",
                fruit_size: "Small (1-2 inches)",
                fruit_color: "Dark brown",
                heat_level: Some("Very Hot (300,000-400,000 SHU)"),
                growth_habit: "Compact bush",
            }),
        },
    ),
    (
        "lemon_drop_pepper",
        PlantRecord {
            name: "Lemon Drop Pepper",
            planting_depth: "0.25 inches",
            spacing: "18-24 inches",
            days_to_germination: "7-14 days",
            days_to_harvest: "85-95 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["basil", "oregano", "marigold", "nasturtium"],
            avoid: &["fennel", "kohlrabi"],
            common_pests: &["aphids", "thrips", "whiteflies"],
            tips: "Bright citrus flavor with moderate heat. Great for salsas and hot sauces.",
            variety: Some(Variety {
                cultivar_type: "Hot Pepper",
                origin: "Peru",
                fruit_size: "Small (2-3 inches)",
                fruit_color: "Bright yellow",
                heat_level: Some("Medium-Hot (15,000-30,000 SHU)"),
                growth_habit: "Compact",
            }),
        },
    ),
    (
        "purple_bell_pepper",
        PlantRecord {
            name: "Purple Bell Pepper",
            planting_depth: "0.25 inches",
            spacing: "18-24 inches",
            days_to_germination: "7-14 days",
            days_to_harvest: "75-85 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["basil", "marjoram", "oregano", "marigold"],
            avoid: &["fennel", "kohlrabi"],
            common_pests: &["aphids", "thrips", "whiteflies"],
            tips: "Sweet, mild flavor. Beautiful purple color when mature. Great for stuffing.",
            variety: Some(Variety {
                cultivar_type: "Sweet Pepper",
                origin: "Modern variety",
                fruit_size: "Large (4-5 inches)",
                fruit_color: "Deep purple",
                heat_level: Some("Sweet (0 SHU)"),
                growth_habit: "Bush",
            }),
        },
    ),
    (
        "chocolate_bell_pepper",
        PlantRecord {
            name: "Chocolate Bell Pepper",
            planting_depth: "0.25 inches",
            spacing: "18-24 inches",
            days_to_germination: "7-14 days",
            days_to_harvest: "75-85 days",
            soil_ph: "6.0-6.8",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["basil", "marjoram", "oregano"],
            avoid: &["fennel", "kohlrabi"],
            common_pests: &["aphids", "thrips", "whiteflies"],
            tips: "Sweet flavor with hint of earthiness. Beautiful brown color when mature.",
            variety: Some(Variety {
                cultivar_type: "Sweet Pepper",
                origin: "Modern variety",
                fruit_size: "Large (4-5 inches)",
                fruit_color: "Dark brown",
                heat_level: Some("Sweet (0 SHU)"),
                growth_habit: "Bush",
            }),
        },
    ),
    // Cucumber varieties
    (
        "lemon_cucumber",
        PlantRecord {
            name: "Lemon Cucumber",
            planting_depth: "0.5-1 inch",
            spacing: "36-48 inches",
            days_to_germination: "3-10 days",
            days_to_harvest: "65-75 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular, deep watering - 1-2 inches per week",
            companions: &["beans", "corn", "radish", "sunflowers", "nasturtium"],
            avoid: &["aromatic herbs", "potato", "sage"],
            common_pests: &["cucumber beetles", "aphids", "spider mites", "powdery mildew"],
            tips: "Round, yellow fruit. Mild, sweet flavor. Great for pickling or fresh eating.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Unknown (introduced 1894)",
                fruit_size: "Medium (2-3 inches diameter)",
                fruit_color: "Pale yellow",
                heat_level: None,
                growth_habit: "Vining",
            }),
        },
    ),
    (
        "armenian_cucumber",
        PlantRecord {
            name: "Armenian Cucumber",
            planting_depth: "0.5-1 inch",
            spacing: "36-48 inches",
            days_to_germination: "3-10 days",
            days_to_harvest: "55-65 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["corn", "beans", "radish", "marigold"],
            avoid: &["aromatic herbs", "potato"],
            common_pests: &["cucumber beetles", "aphids"],
            tips: "Actually a melon! Mild flavor, no bitterness. Excellent trellised.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Armenia",
                fruit_size: "Very long (12-24 inches)",
                fruit_color: "Light green",
                heat_level: None,
                growth_habit: "Vining",
            }),
        },
    ),
    (
        "pickling_cucumber",
        PlantRecord {
            name: "Boston Pickling Cucumber",
            planting_depth: "0.5-1 inch",
            spacing: "36-48 inches",
            days_to_germination: "3-10 days",
            days_to_harvest: "50-60 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["beans", "corn", "radish", "sunflowers"],
            avoid: &["aromatic herbs", "potato"],
            common_pests: &["cucumber beetles", "aphids", "spider mites"],
            tips: "Perfect for pickling. Crisp texture. Harvest small for best pickles.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Boston area (1880s)",
                fruit_size: "Small-medium (3-5 inches)",
                fruit_color: "Dark green",
                heat_level: None,
                growth_habit: "Vining",
            }),
        },
    ),
    // Bean varieties
    (
        "purple_pod_ded_bean",
        PlantRecord {
            name: "Purple Podded Bean",
            planting_depth: "1 inch",
            spacing: "3-4 inches",
            days_to_germination: "4-10 days",
            days_to_harvest: "55-65 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering, avoid overhead watering",
            companions: &["carrots", "cucumber", "marigold", "potato", "corn"],
            avoid: &["onion", "garlic", "fennel", "gladiolus"],
            common_pests: &["bean beetles", "aphids", "spider mites"],
            tips: "Beautiful purple pods turn green when cooked. Fix nitrogen in soil.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Unknown (pre-1800s)",
                fruit_size: "Medium pods (4-6 inches)",
                fruit_color: "Purple pods",
                heat_level: None,
                growth_habit: "Bush",
            }),
        },
    ),
    (
        "scarlet_runner_bean",
        PlantRecord {
            name: "Scarlet Runner Bean",
            planting_depth: "1 inch",
            spacing: "6-8 inches",
            days_to_germination: "4-10 days",
            days_to_harvest: "65-75 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun to partial shade",
            watering_needs: "Regular watering",
            companions: &["corn", "sunflower", "marigold"],
            avoid: &["onion", "garlic", "beet"],
            common_pests: &["bean beetles", "aphids"],
            tips: "Beautiful red flowers! Edible flowers and pods. Excellent trellised.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "South America",
                fruit_size: "Long pods (6-8 inches)",
                fruit_color: "Green pods, red flowers",
                heat_level: None,
                growth_habit: "Climbing",
            }),
        },
    ),
    (
        "yellow_wax_bean",
        PlantRecord {
            name: "Yellow Wax Bean",
            planting_depth: "1 inch",
            spacing: "3-4 inches",
            days_to_germination: "4-10 days",
            days_to_harvest: "50-60 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["carrots", "cucumber", "marigold", "potato"],
            avoid: &["onion", "garlic", "fennel"],
            common_pests: &["bean beetles", "aphids"],
            tips: "Mild, buttery flavor. Beautiful yellow pods. Great for fresh eating.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Europe",
                fruit_size: "Medium pods (4-6 inches)",
                fruit_color: "Yellow pods",
                heat_level: None,
                growth_habit: "Bush",
            }),
        },
    ),
    // Radish varieties
    (
        "watermelon_radish",
        PlantRecord {
            name: "Watermelon Radish",
            planting_depth: "0.5 inch",
            spacing: "2-3 inches",
            days_to_germination: "3-7 days",
            days_to_harvest: "60-70 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun to partial shade",
            watering_needs: "Regular, consistent watering",
            companions: &["lettuce", "spinach", "peas", "cucumber", "nasturtium"],
            avoid: &["hyssop"],
            common_pests: &["flea beetles", "root maggots"],
            tips: "Mild, sweet flavor. Beautiful pink interior. Great for salads.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "China",
                fruit_size: "Large (3-4 inches)",
                fruit_color: "Green skin, pink interior",
                heat_level: None,
                growth_habit: "Root vegetable",
            }),
        },
    ),
    (
        "black_spanish_radish",
        PlantRecord {
            name: "Black Spanish Radish",
            planting_depth: "0.5 inch",
            spacing: "2-3 inches",
            days_to_germination: "3-7 days",
            days_to_harvest: "55-65 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["lettuce", "spinach", "carrots", "parsley"],
            avoid: &["hyssop", "cabbage"],
            common_pests: &["flea beetles", "root maggots"],
            tips: "Hot, pungent flavor. Excellent for winter storage. Great for kimchi.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Spain",
                fruit_size: "Large (3-4 inches)",
                fruit_color: "Black skin, white flesh",
                heat_level: None,
                growth_habit: "Root vegetable",
            }),
        },
    ),
    (
        "easter_egg_radish",
        PlantRecord {
            name: "Easter Egg Radish",
            planting_depth: "0.5 inch",
            spacing: "2 inches",
            days_to_germination: "3-7 days",
            days_to_harvest: "25-30 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun to partial shade",
            watering_needs: "Regular, consistent watering",
            companions: &["lettuce", "spinach", "peas", "cucumber"],
            avoid: &["hyssop"],
            common_pests: &["flea beetles", "root maggots"],
            tips: "Mix of red, white, and purple radishes. Fast growing. Great for kids.",
            variety: Some(Variety {
                cultivar_type: "Heirloom Mix",
                origin: "Mixed varieties",
                fruit_size: "Small-medium (1-2 inches)",
                fruit_color: "Mixed colors",
                heat_level: None,
                growth_habit: "Root vegetable",
            }),
        },
    ),
    // Specialty vegetables
    (
        "rainbow_chard",
        PlantRecord {
            name: "Rainbow Swiss Chard",
            planting_depth: "0.5 inch",
            spacing: "8-12 inches",
            days_to_germination: "5-10 days",
            days_to_harvest: "50-60 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun to partial shade",
            watering_needs: "Regular watering",
            companions: &["beans", "onions", "cabbage", "lettuce"],
            avoid: &["beets", "spinach"],
            common_pests: &["leaf miners", "aphids", "slugs"],
            tips: "Beautiful colored stems. Cut outer leaves for continuous harvest.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Mediterranean",
                fruit_size: "Large leaves (12-18 inches)",
                fruit_color: "Green leaves, colorful stems",
                heat_level: None,
                growth_habit: "Leafy green",
            }),
        },
    ),
    (
        "purple_kohlrabi",
        PlantRecord {
            name: "Purple Kohlrabi",
            planting_depth: "0.25 inch",
            spacing: "6-8 inches",
            days_to_germination: "3-7 days",
            days_to_harvest: "55-65 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["beets", "onions", "cucumber", "lettuce"],
            avoid: &["tomatoes", "peppers", "pole beans"],
            common_pests: &["flea beetles", "cabbage worms", "aphids"],
            tips: "Mild, sweet flavor. Edible leaves and bulb. Great for slaws.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Germany",
                fruit_size: "Medium bulb (3-4 inches)",
                fruit_color: "Purple skin, white flesh",
                heat_level: None,
                growth_habit: "Bulb vegetable",
            }),
        },
    ),
    (
        "purple_cauliflower",
        PlantRecord {
            name: "Purple Cauliflower",
            planting_depth: "0.25 inch",
            spacing: "18-24 inches",
            days_to_germination: "3-7 days",
            days_to_harvest: "80-90 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["beans", "celery", "onions", "peas"],
            avoid: &["tomatoes", "strawberries"],
            common_pests: &["cabbage worms", "aphids", "cabbage loopers"],
            tips: "Rich in anthocyanins. Mild, nutty flavor. Blanch when head forms.",
            variety: Some(Variety {
                cultivar_type: "Heirloom",
                origin: "Italy",
                fruit_size: "Medium head (6-8 inches)",
                fruit_color: "Purple",
                heat_level: None,
                growth_habit: "Head forming",
            }),
        },
    ),
    (
        "orange_cauliflower",
        PlantRecord {
            name: "Orange Cauliflower",
            planting_depth: "0.25 inch",
            spacing: "18-24 inches",
            days_to_germination: "3-7 days",
            days_to_harvest: "80-90 days",
            soil_ph: "6.0-7.0",
            sun_requirement: "Full sun",
            watering_needs: "Regular watering",
            companions: &["beans", "celery", "onions", "peas"],
            avoid: &["tomatoes", "strawberries"],
            common_pests: &["cabbage worms", "aphids", "cabbage loopers"],
            tips: "High in beta-carotene. Sweet, mild flavor. Retains color when cooked.",
            variety: Some(Variety {
                cultivar_type: "Modern variety",
                origin: "Developed in Canada",
                fruit_size: "Medium head (6-8 inches)",
                fruit_color: "Orange",
                heat_level: None,
                growth_habit: "Head forming",
            }),
        },
    ),
];

/// Zones 1 through 10, in order. Index `n - 1` holds zone `n`.
pub(crate) static ZONES: [ZoneRecord; 10] = [
    ZoneRecord {
        first_frost: "Sep 15-30",
        last_frost: "May 15-Jun 15",
    },
    ZoneRecord {
        first_frost: "Sep 15-30",
        last_frost: "May 1-May 31",
    },
    ZoneRecord {
        first_frost: "Sep 30-Oct 15",
        last_frost: "May 1-May 31",
    },
    ZoneRecord {
        first_frost: "Oct 1-Oct 15",
        last_frost: "Apr 15-May 15",
    },
    ZoneRecord {
        first_frost: "Oct 15-Oct 30",
        last_frost: "Apr 1-Apr 30",
    },
    ZoneRecord {
        first_frost: "Oct 30-Nov 15",
        last_frost: "Mar 15-Apr 15",
    },
    ZoneRecord {
        first_frost: "Nov 1-Nov 15",
        last_frost: "Mar 15-Apr 15",
    },
    ZoneRecord {
        first_frost: "Nov 15-Dec 15",
        last_frost: "Feb 1-Mar 1",
    },
    ZoneRecord {
        first_frost: "Dec 15-Jan 15",
        last_frost: "Jan 15-Feb 15",
    },
    ZoneRecord {
        first_frost: "Rare frost",
        last_frost: "Rare frost",
    },
];
