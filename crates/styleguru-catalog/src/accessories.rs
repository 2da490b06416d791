//! Accessory shelves keyed by gender.

use rand::Rng;
use styleguru_core::catalog::CatalogItem;

use crate::keys::Gender;
use crate::retail::{priced_item, Retailer};

#[derive(Debug)]
pub(crate) struct AccessoryTable {
    male: Vec<CatalogItem>,
    female: Vec<CatalogItem>,
    other: Vec<CatalogItem>,
}

impl AccessoryTable {
    pub(crate) fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            male: vec![
                priced_item(
                    rng,
                    "Fossil Chronograph Watch",
                    "Accessory",
                    (8000, 15000),
                    "https://fossil.scene7.com/is/image/Fossil/FS4812_main?$sfcc_b2c_pdp_d2c_large$",
                    Retailer::Amazon,
                ),
                priced_item(
                    rng,
                    "Tommy Hilfiger Leather Belt",
                    "Accessory",
                    (1500, 3000),
                    "https://assets.myntassets.com/h_1440,q_90,w_1080/v1/assets/images/2123149/2017/9/25/11506305086842-Tommy-Hilfiger-Men-Brown-Leather-Belt-3281506305086653-1.jpg",
                    Retailer::Myntra,
                ),
            ],
            female: vec![
                priced_item(
                    rng,
                    "Giva Silver Necklace",
                    "Accessory",
                    (1200, 3000),
                    "https://www.giva.co/cdn/shop/products/NK096-1_2.jpg?v=1682573752&width=1000",
                    Retailer::Myntra,
                ),
                priced_item(
                    rng,
                    "Baggit Women's Handbag",
                    "Accessory",
                    (2000, 4000),
                    "https://www.baggit.com/cdn/shop/files/YOLOLYYZESTA-BEIGE_1.jpg?v=1708343997&width=800",
                    Retailer::Flipkart,
                ),
            ],
            other: vec![priced_item(
                rng,
                "Ray-Ban Aviator Sunglasses",
                "Accessory",
                (5000, 9000),
                "https://india.ray-ban.com/media/catalog/product/cache/ecdbd5a50e7f997f21226adb85763570/0/r/0rb3025l020558_1.jpg",
                Retailer::Amazon,
            )],
        }
    }

    pub(crate) fn shelf(&self, gender: Gender) -> &[CatalogItem] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Other => &self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn every_shelf_is_stocked() {
        let mut rng = StdRng::seed_from_u64(2);
        let table = AccessoryTable::build(&mut rng);
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert!(!table.shelf(gender).is_empty());
        }
    }
}
