//! Canned recommendation payloads.
//!
//! One ready-to-render payload per kind, committed whenever the gateway is
//! slow, down, or answers with nothing usable. The entries are the curated
//! sets the intake pages shipped with, so a fallback still looks like a
//! real recommendation rather than an error state.

use styleguru_core::catalog::CatalogItem;
use styleguru_core::recommendations::{
    AccessorySuggestions, CareRoutine, DailyPlan, DietPlan, EyewearRecommendations, MealCard,
    Outfit, OutfitSuggestions, ProductSuggestions, RecommendedItem, WorkoutDay, WorkoutPlan,
};

fn item(name: &str, category: &str, price: &str, image: &str, link: &str) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        image: image.to_string(),
        link: link.to_string(),
    }
}

fn recommended(item: CatalogItem, reason: &str) -> RecommendedItem {
    RecommendedItem {
        item,
        reason: reason.to_string(),
    }
}

/// Two business-formal outfits.
#[must_use]
pub fn outfits() -> OutfitSuggestions {
    OutfitSuggestions {
        outfits: vec![
            Outfit {
                name: "Classic Business Formal".to_string(),
                description:
                    "A timeless ensemble perfect for important meetings and corporate events"
                        .to_string(),
                pieces: vec![
                    item(
                        "Hugo Boss Slim Fit Blazer",
                        "Blazer",
                        "$299.99",
                        "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                        "https://www.amazon.com/Hugo-Boss-Slim-Fit-Blazer/dp/B07XYZ1234",
                    ),
                    item(
                        "Calvin Klein Dress Shirt",
                        "Shirt",
                        "$89.99",
                        "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=400&h=500&fit=crop",
                        "https://www.amazon.com/Calvin-Klein-Dress-Shirt-White/dp/B08ABC5678",
                    ),
                    item(
                        "Banana Republic Trousers",
                        "Pants",
                        "$79.99",
                        "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=400&h=500&fit=crop",
                        "https://www.amazon.com/Banana-Republic-Trousers-Formal/dp/B09DEF9012",
                    ),
                ],
            },
            Outfit {
                name: "Modern Professional".to_string(),
                description: "Contemporary take on business attire with updated silhouettes"
                    .to_string(),
                pieces: vec![
                    item(
                        "Theory Unstructured Blazer",
                        "Blazer",
                        "$395.00",
                        "https://images.unsplash.com/photo-1593030761757-71cae45d48a7?w=400&h=500&fit=crop",
                        "https://www.amazon.com/Theory-Unstructured-Blazer-Professional/dp/B07GHI3456",
                    ),
                    item(
                        "Brooks Brothers Oxford Shirt",
                        "Shirt",
                        "$129.99",
                        "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=400&h=500&fit=crop",
                        "https://www.amazon.com/Brooks-Brothers-Oxford-Shirt/dp/B08XYZ7890",
                    ),
                    item(
                        "J.Crew Chino Pants",
                        "Pants",
                        "$69.99",
                        "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=400&h=500&fit=crop",
                        "https://www.amazon.com/J-Crew-Chino-Pants-Professional/dp/B09ABC1234",
                    ),
                ],
            },
        ],
        style_tip: "For business formal looks, focus on classic pieces in neutral colors. \
             Mix and match separates to create multiple outfits from fewer pieces."
            .to_string(),
    }
}

/// Six formal accessories, each with its own reason.
#[must_use]
pub fn accessories() -> AccessorySuggestions {
    AccessorySuggestions {
        accessories: vec![
            recommended(
                item(
                    "Tommy Hilfiger Leather Belt",
                    "Accessory",
                    "$49.99",
                    "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                    "https://www.amazon.com/Tommy-Hilfiger-Leather-Belt-Brown/dp/B07XYZ1234",
                ),
                "Classic brown leather belt perfect for business formal attire",
            ),
            recommended(
                item(
                    "Silk Pocket Square Set",
                    "Accessory",
                    "$24.99",
                    "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                    "https://www.amazon.com/Silk-Pocket-Square-Set-Formal/dp/B08ABC5678",
                ),
                "Premium silk pocket squares in classic colors for your blazer",
            ),
            recommended(
                item(
                    "Fossil Minimalist Watch",
                    "Accessory",
                    "$129.99",
                    "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                    "https://www.amazon.com/Fossil-Minimalist-Watch-Stainless-Steel/dp/B09DEF9012",
                ),
                "Elegant stainless steel watch for professional settings",
            ),
            recommended(
                item(
                    "Leather Business Portfolio",
                    "Accessory",
                    "$89.99",
                    "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=400&h=500&fit=crop",
                    "https://www.amazon.com/Leather-Business-Portfolio-Professional/dp/B07GHI3456",
                ),
                "Professional leather portfolio for documents and meetings",
            ),
            recommended(
                item(
                    "Gold Cufflinks",
                    "Accessory",
                    "$34.99",
                    "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=400&h=500&fit=crop",
                    "https://www.amazon.com/Gold-Cufflinks-Formal-Attire/dp/B08XYZ7890",
                ),
                "Sophisticated gold cufflinks for formal shirt cuffs",
            ),
            recommended(
                item(
                    "Cashmere Scarf",
                    "Accessory",
                    "$79.99",
                    "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?w=400&h=500&fit=crop",
                    "https://www.amazon.com/Cashmere-Scarf-Luxury-Winter/dp/B09ABC1234",
                ),
                "Luxury cashmere scarf for cold weather elegance",
            ),
        ],
        style_tip: "For business formal looks, stick to classic accessories in neutral colors. \
             Less is more - choose 2-3 key pieces that complement your outfit without \
             overwhelming it."
            .to_string(),
    }
}

/// Six rectangular frames pitched at round faces.
#[must_use]
pub fn eyewear() -> EyewearRecommendations {
    EyewearRecommendations {
        eyewear: vec![
            recommended(
                item(
                    "Ray-Ban Wayfarer Classic",
                    "Eyewear",
                    "$154.00",
                    "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                    "https://www.amazon.com/Ray-Ban-Wayfarer-Classic-Sunglasses/dp/B0014Z4L8E",
                ),
                "Classic rectangular frames perfect for round faces",
            ),
            recommended(
                item(
                    "Warby Parker Haskell",
                    "Eyewear",
                    "$95.00",
                    "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=400&h=500&fit=crop",
                    "https://www.warbyparker.com/eyeglasses/men/haskell",
                ),
                "Modern rectangular frames with clean lines",
            ),
            recommended(
                item(
                    "Oakley Holbrook",
                    "Eyewear",
                    "$162.00",
                    "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=400&h=500&fit=crop",
                    "https://www.amazon.com/Oakley-Holbrook-Sunglasses-Polished-Black/dp/B003OBZ64A",
                ),
                "Sporty rectangular frames for active lifestyles",
            ),
            recommended(
                item(
                    "Tom Ford FT5231",
                    "Eyewear",
                    "$395.00",
                    "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=400&h=500&fit=crop",
                    "https://www.amazon.com/Tom-Ford-FT5231-Sunglasses/dp/B07XYZ1234",
                ),
                "Luxury rectangular frames with premium materials",
            ),
            recommended(
                item(
                    "Persol PO3260S",
                    "Eyewear",
                    "$320.00",
                    "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=400&h=500&fit=crop",
                    "https://www.amazon.com/Persol-PO3260S-Sunglasses-Black/dp/B08ABC5678",
                ),
                "Italian craftsmanship with classic rectangular design",
            ),
            recommended(
                item(
                    "Maui Jim Red Sands",
                    "Eyewear",
                    "$229.00",
                    "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=400&h=500&fit=crop",
                    "https://www.amazon.com/Maui-Jim-Red-Sands-Sunglasses/dp/B09DEF9012",
                ),
                "Polarized lenses with rectangular frame design",
            ),
        ],
        style_tip: "For round faces, choose angular frames with sharp edges to add definition. \
             Rectangular, square, or cat-eye frames will help balance your facial proportions."
            .to_string(),
    }
}

/// A balanced high-protein day.
#[must_use]
pub fn diet() -> DietPlan {
    DietPlan {
        plan: DailyPlan {
            breakfast: MealCard {
                title: "Protein-Packed Oatmeal Bowl".to_string(),
                description: "Steel-cut oats with almond milk, topped with berries, nuts, and a \
                     scoop of protein powder. Perfect for sustained energy throughout the morning."
                    .to_string(),
                calories: "420 cal".to_string(),
            },
            lunch: MealCard {
                title: "Grilled Chicken Quinoa Salad".to_string(),
                description: "Mixed greens with grilled chicken breast, quinoa, cherry tomatoes, \
                     cucumber, and balsamic vinaigrette. High in protein and fiber."
                    .to_string(),
                calories: "380 cal".to_string(),
            },
            dinner: MealCard {
                title: "Salmon with Roasted Vegetables".to_string(),
                description: "Baked salmon fillet with roasted sweet potatoes, broccoli, and \
                     asparagus. Rich in omega-3s and essential nutrients."
                    .to_string(),
                calories: "450 cal".to_string(),
            },
        },
        nutrition_tip: "Focus on lean proteins, complex carbohydrates, and healthy fats. Stay \
             hydrated with 8-10 glasses of water daily and include plenty of fiber-rich \
             vegetables."
            .to_string(),
    }
}

/// Morning/evening skin schedule and a weekly hair schedule.
#[must_use]
pub fn care() -> CareRoutine {
    CareRoutine {
        skin_routine: "Morning: Cleanse with gentle cleanser, apply vitamin C serum, moisturize \
             with SPF 30+. Evening: Double cleanse, apply retinol serum, moisturize with night \
             cream."
            .to_string(),
        hair_routine: "Wash 2-3 times per week with sulfate-free shampoo. Deep condition once \
             weekly. Use leave-in conditioner daily. Trim every 6-8 weeks."
            .to_string(),
        care_tip: "Consistency is key. Stick to your routine for at least a few weeks to see \
             results, and always remember to wear sunscreen daily!"
            .to_string(),
    }
}

/// Skincare or haircare staples, keyed the same way the gateway keys the
/// product route (anything other than `"hair"` reads as skin).
#[must_use]
pub fn products(product_type: &str) -> ProductSuggestions {
    let products = if product_type == "hair" {
        vec![
            item(
                "Olaplex No. 3 Hair Perfector",
                "Haircare",
                "$28.00",
                "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                "https://www.amazon.com/OLAPLEX-No-3-Hair-Perfector/dp/B00SNM5K8I",
            ),
            item(
                "Briogeo Don't Despair Repair Mask",
                "Haircare",
                "$38.00",
                "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?w=400&h=500&fit=crop",
                "https://www.amazon.com/Briogeo-Dont-Despair-Repair-Mask/dp/B09DEF9012",
            ),
            item(
                "Living Proof No Frizz Leave-In",
                "Haircare",
                "$26.00",
                "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?w=400&h=500&fit=crop",
                "https://www.amazon.com/Living-Proof-No-Frizz-Leave-In/dp/B07GHI3456",
            ),
        ]
    } else {
        vec![
            item(
                "CeraVe Foaming Facial Cleanser",
                "Skincare",
                "$16.99",
                "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                "https://www.amazon.com/CeraVe-Foaming-Facial-Cleanser-Oily/dp/B00TTD9BRC",
            ),
            item(
                "The Ordinary Vitamin C Serum",
                "Skincare",
                "$12.99",
                "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                "https://www.amazon.com/Ordinary-Vitamin-Serum-Brightening-Formula/dp/B07XYZ1234",
            ),
            item(
                "Neutrogena Oil-Free Moisturizer",
                "Skincare",
                "$14.99",
                "https://m.media-amazon.com/images/I/71QKQfkWq1L._AC_UL480_FMwebp_QL65_.jpg",
                "https://www.amazon.com/Neutrogena-Oil-Free-Moisturizer-SPF-35/dp/B08ABC5678",
            ),
        ]
    };

    ProductSuggestions {
        products,
        care_tip: "Patch-test new products and add them to your routine one at a time."
            .to_string(),
    }
}

/// A four-day strength split.
#[must_use]
pub fn workout() -> WorkoutPlan {
    WorkoutPlan {
        plan_title: "Strength & Muscle Building Program".to_string(),
        weekly_focus: "This 4-day split focuses on compound movements and progressive overload \
             for maximum muscle growth and strength gains."
            .to_string(),
        workout_split: vec![
            WorkoutDay {
                day: 1,
                title: "Push Day".to_string(),
                exercises: vec![
                    "Bench Press: 4 sets x 8-10 reps".to_string(),
                    "Overhead Press: 3 sets x 8-10 reps".to_string(),
                    "Incline Dumbbell Press: 3 sets x 10-12 reps".to_string(),
                    "Dips: 3 sets x 8-12 reps".to_string(),
                    "Lateral Raises: 3 sets x 12-15 reps".to_string(),
                ],
            },
            WorkoutDay {
                day: 2,
                title: "Pull Day".to_string(),
                exercises: vec![
                    "Deadlifts: 4 sets x 6-8 reps".to_string(),
                    "Barbell Rows: 3 sets x 8-10 reps".to_string(),
                    "Pull-ups: 3 sets x 6-10 reps".to_string(),
                    "Lat Pulldowns: 3 sets x 10-12 reps".to_string(),
                    "Bicep Curls: 3 sets x 12-15 reps".to_string(),
                ],
            },
            WorkoutDay {
                day: 3,
                title: "Legs Day".to_string(),
                exercises: vec![
                    "Squats: 4 sets x 8-10 reps".to_string(),
                    "Romanian Deadlifts: 3 sets x 8-10 reps".to_string(),
                    "Leg Press: 3 sets x 10-12 reps".to_string(),
                    "Walking Lunges: 3 sets x 10 reps each leg".to_string(),
                    "Calf Raises: 4 sets x 15-20 reps".to_string(),
                ],
            },
            WorkoutDay {
                day: 4,
                title: "Rest & Recovery".to_string(),
                exercises: vec![
                    "Light stretching or yoga".to_string(),
                    "Foam rolling".to_string(),
                    "Active recovery walk".to_string(),
                    "Hydration focus".to_string(),
                    "Sleep optimization".to_string(),
                ],
            },
        ],
        pro_tip: "Focus on proper form over weight. Progressive overload is key - aim to \
             increase weight or reps every 2-3 weeks. Rest 2-3 minutes between compound \
             movements and 1-2 minutes for isolation exercises."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::HasContent;

    #[test]
    fn every_canned_payload_has_content() {
        assert!(outfits().has_content());
        assert!(accessories().has_content());
        assert!(eyewear().has_content());
        assert!(diet().has_content());
        assert!(care().has_content());
        assert!(products("skin").has_content());
        assert!(products("hair").has_content());
        assert!(workout().has_content());
    }

    #[test]
    fn product_fallbacks_match_the_requested_kind() {
        let skin = products("skin");
        assert!(skin.products.iter().all(|p| p.category == "Skincare"));
        let hair = products("hair");
        assert!(hair.products.iter().all(|p| p.category == "Haircare"));
        // Unknown kinds read as skin, like the live route.
        let unknown = products("nails");
        assert_eq!(unknown.products[0].name, skin.products[0].name);
    }

    #[test]
    fn canned_outfits_keep_three_pieces_each() {
        let suggestions = outfits();
        assert_eq!(suggestions.outfits.len(), 2);
        for outfit in &suggestions.outfits {
            assert_eq!(outfit.pieces.len(), 3);
        }
    }
}
