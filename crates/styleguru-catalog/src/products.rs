//! Care-product shelves: skin and hair tables keyed by gender, then by
//! skin/hair type.
//!
//! Type keys differ per gender (men's hair products are shelved under Wavy
//! and Straight, women's under Curly and Coily), so shelves keep their
//! entries ordered and fall back to the first one when a key is absent.

use styleguru_core::catalog::CatalogItem;

use crate::keys::{Gender, ProductKind};
use crate::retail::{fixed_item, Retailer};

#[derive(Debug)]
struct Shelf {
    entries: Vec<(&'static str, Vec<CatalogItem>)>,
}

impl Shelf {
    fn items(&self, type_key: &str) -> &[CatalogItem] {
        if let Some((_, items)) = self.entries.iter().find(|(key, _)| *key == type_key) {
            return items;
        }
        self.entries
            .first()
            .map_or(&[], |(_, items)| items.as_slice())
    }
}

#[derive(Debug)]
struct GenderShelves {
    male: Shelf,
    female: Shelf,
    other: Shelf,
}

impl GenderShelves {
    fn shelf(&self, gender: Gender) -> &Shelf {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Other => &self.other,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ProductTable {
    skin: GenderShelves,
    hair: GenderShelves,
}

impl ProductTable {
    #[allow(clippy::too_many_lines)]
    pub(crate) fn build() -> Self {
        Self {
            skin: GenderShelves {
                male: Shelf {
                    entries: vec![
                        (
                            "Oily",
                            vec![
                                fixed_item(
                                    "Nivea Men Oil Control Face Wash",
                                    "Skincare",
                                    "₹200-₹300",
                                    "https://images-static.nykaa.com/media/catalog/product/tr:w-220,h-220,c-fit/d/5/d55f9f74005900034455_1.jpg",
                                    Retailer::Amazon,
                                    "Nivea Men Oil Control Face Wash",
                                ),
                                fixed_item(
                                    "The Man Company Oil Control Moisturizer",
                                    "Skincare",
                                    "₹350-₹450",
                                    "https://www.themancompany.com/cdn/shop/products/Oil-control-moisturising-cream-45g-_1400x.jpg?v=1676632483",
                                    Retailer::Myntra,
                                    "The Man Company Oil Control Moisturizer",
                                ),
                            ],
                        ),
                        (
                            "Dry",
                            vec![
                                fixed_item(
                                    "Cetaphil Gentle Skin Cleanser",
                                    "Skincare",
                                    "₹300-₹500",
                                    "https://www.cetaphil.in/sites/default/files/2022-07/Cetaphil_Gentle_Skin_Cleanser_1L_F_IN-Front.png",
                                    Retailer::Flipkart,
                                    "Cetaphil Gentle Skin Cleanser",
                                ),
                                fixed_item(
                                    "Beardo Ultraglow All in 1 Men's Face Lotion",
                                    "Skincare",
                                    "₹250-₹350",
                                    "https://beardo.in/cdn/shop/files/1_e9621539-773a-476c-8519-f705500d0577.jpg?v=1686650424",
                                    Retailer::Amazon,
                                    "Beardo Ultraglow Lotion",
                                ),
                            ],
                        ),
                    ],
                },
                female: Shelf {
                    entries: vec![
                        (
                            "Oily",
                            vec![
                                fixed_item(
                                    "Clean & Clear Foaming Face Wash",
                                    "Skincare",
                                    "₹150-₹250",
                                    "https://m.media-amazon.com/images/I/51v5k2FXXEL.jpg",
                                    Retailer::Flipkart,
                                    "Clean & Clear Face Wash",
                                ),
                                fixed_item(
                                    "Plum Green Tea Mattifying Moisturizer",
                                    "Skincare",
                                    "₹400-₹500",
                                    "https://plumgoodness.com/cdn/shop/files/1_25e8d901-76f9-4672-9b2f-9812423c5e3d.jpg?v=1703233306",
                                    Retailer::Myntra,
                                    "Plum Green Tea Moisturizer",
                                ),
                            ],
                        ),
                        (
                            "Dry",
                            vec![
                                fixed_item(
                                    "Simple Kind to Skin Refreshing Facial Wash",
                                    "Skincare",
                                    "₹300-₹400",
                                    "https://www.simple.co.uk/cdn/shop/products/SimpleKindtoSkinRefreshingFacialWash150ml-UK_3dfe8430-b4eb-4753-9366-07e3240e1596_1024x1024.png?v=1681289196",
                                    Retailer::Amazon,
                                    "Simple Facial Wash",
                                ),
                                fixed_item(
                                    "Neutrogena Hydro Boost Water Gel",
                                    "Skincare",
                                    "₹800-₹1000",
                                    "https://m.media-amazon.com/images/I/61Tj-iEXjlL._SL1500_.jpg",
                                    Retailer::Myntra,
                                    "Neutrogena Hydro Boost",
                                ),
                            ],
                        ),
                    ],
                },
                other: Shelf {
                    entries: vec![
                        (
                            "Oily",
                            vec![fixed_item(
                                "Cosrx Salicylic Acid Daily Gentle Cleanser",
                                "Skincare",
                                "₹600-₹800",
                                "https://m.media-amazon.com/images/I/51-g2y6YjIL.jpg",
                                Retailer::Myntra,
                                "Cosrx Cleanser",
                            )],
                        ),
                        (
                            "Dry",
                            vec![fixed_item(
                                "The Ordinary Hyaluronic Acid 2% + B5",
                                "Skincare",
                                "₹550-₹700",
                                "https://theordinary.com/dw/image/v2/BFKJ_PRD/on/demandware.static/-/Sites-deciem-master/default/dw35032b85/images/products/theordinary/rdn-hyaluronic-acid-2-b5-30ml.png?sw=1200&sh=1200&sm=fit",
                                Retailer::Amazon,
                                "The Ordinary Hyaluronic Acid",
                            )],
                        ),
                    ],
                },
            },
            hair: GenderShelves {
                male: Shelf {
                    entries: vec![
                        (
                            "Wavy",
                            vec![fixed_item(
                                "Beardo Hair Fall Control Shampoo",
                                "Haircare",
                                "₹300-₹400",
                                "https://beardo.in/cdn/shop/products/Beardohairfallcontrolshampoo200ml.jpg?v=1677134371",
                                Retailer::Myntra,
                                "Beardo Shampoo",
                            )],
                        ),
                        (
                            "Straight",
                            vec![fixed_item(
                                "Ustraa Anti-Dandruff Shampoo",
                                "Haircare",
                                "₹400-₹500",
                                "https://www.ustraa.com/cdn/shop/products/1_2484f275-c967-4632-9571-0b5c1f544520.jpg?v=1682570081",
                                Retailer::Amazon,
                                "Ustraa Shampoo",
                            )],
                        ),
                    ],
                },
                female: Shelf {
                    entries: vec![
                        (
                            "Curly",
                            vec![
                                fixed_item(
                                    "Curl Up Curl Moisturising Shampoo",
                                    "Haircare",
                                    "₹500-₹600",
                                    "https://curlsup.com/cdn/shop/products/CURLMOISTURISINGSHAMPOO_1.jpg?v=1648017424",
                                    Retailer::Myntra,
                                    "Curl Up Shampoo",
                                ),
                                fixed_item(
                                    "L'Oréal Paris Hyaluron Moisture Conditioner",
                                    "Haircare",
                                    "₹200-₹300",
                                    "https://www.lorealparis.co.in/-/media/project/loreal/brand-sites/oap/apac/in/products/hair-care/72h-hyaluron-moisture/loreal-paris-hyaluron-moisture-72h-moisture-filling-conditioner-180ml/ha-con-packshot-180.jpg",
                                    Retailer::Flipkart,
                                    "LOreal Hyaluron Conditioner",
                                ),
                            ],
                        ),
                        (
                            "Coily",
                            vec![fixed_item(
                                "Minimalist Maleic Bond Repair Complex",
                                "Haircare",
                                "₹450-₹550",
                                "https://beminimalist.co/cdn/shop/products/MaleicBondRepairComplex05_Shampoo-01.jpg?v=1664448512",
                                Retailer::Amazon,
                                "Minimalist Bond Repair",
                            )],
                        ),
                    ],
                },
                other: Shelf {
                    entries: vec![(
                        "Wavy",
                        vec![fixed_item(
                            "Tresemmé Keratin Smooth Shampoo",
                            "Haircare",
                            "₹500-₹700",
                            "https://www.tresemme.com/in/cdn/shop/files/New-Keratin-Smooth-Shampoo-735ml-Front.png?v=1693485081",
                            Retailer::Flipkart,
                            "Tresemme Keratin Shampoo",
                        )],
                    )],
                },
            },
        }
    }

    pub(crate) fn items(&self, kind: ProductKind, gender: Gender, type_key: &str) -> &[CatalogItem] {
        let shelves = match kind {
            ProductKind::Skin => &self.skin,
            ProductKind::Hair => &self.hair,
        };
        shelves.shelf(gender).items(type_key)
    }
}
