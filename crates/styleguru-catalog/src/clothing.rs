//! Clothing racks keyed by gender: tops, bottoms, and shoes.

use rand::Rng;
use styleguru_core::catalog::CatalogItem;

use crate::keys::Gender;
use crate::retail::{priced_item, Retailer};

/// The three piece groups an outfit is assembled from.
#[derive(Debug, Clone)]
pub struct ClothingRack {
    pub tops: Vec<CatalogItem>,
    pub bottoms: Vec<CatalogItem>,
    pub shoes: Vec<CatalogItem>,
}

#[derive(Debug)]
pub(crate) struct ClothingTable {
    male: ClothingRack,
    female: ClothingRack,
    other: ClothingRack,
}

impl ClothingTable {
    pub(crate) fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            male: ClothingRack {
                tops: vec![
                    priced_item(
                        rng,
                        "Levi's Classic Crewneck T-Shirt",
                        "Top",
                        (800, 1500),
                        "https://rukminim2.flixcart.com/image/832/832/xif0q/t-shirt/p/s/e/s-21798-103-levi-s-original-imagz3y8z3nh6wmc.jpeg?q=70",
                        Retailer::Amazon,
                    ),
                    priced_item(
                        rng,
                        "Arrow Formal Cotton Shirt",
                        "Top",
                        (1500, 2500),
                        "https://rukminim2.flixcart.com/image/832/832/xif0q/shirt/i/v/9/-original-imagn3k3gx6zfvgy.jpeg?q=70",
                        Retailer::Myntra,
                    ),
                    priced_item(
                        rng,
                        "Puma Graphic Hoodie",
                        "Top",
                        (2000, 3500),
                        "https://rukminim2.flixcart.com/image/832/832/xif0q/sweatshirt/t/u/b/m-67591001-puma-original-imagvff3sezb6hmy.jpeg?q=70",
                        Retailer::Flipkart,
                    ),
                ],
                bottoms: vec![
                    priced_item(
                        rng,
                        "U.S. Polo Assn. Denim Jeans",
                        "Bottom",
                        (2000, 3500),
                        "https://assets.ajio.com/medias/sys_master/root/20231123/2ywx/655f4692ddf7791519a0094d/-473Wx593H-466810239-midblue-MODEL.jpg",
                        Retailer::Amazon,
                    ),
                    priced_item(
                        rng,
                        "Peter England Slim Fit Chinos",
                        "Bottom",
                        (1500, 2800),
                        "https://assets.ajio.com/medias/sys_master/root/20230624/6Gzm/64966953e4b0ef1aaa08a3f8/-473Wx593H-464082662-black-MODEL.jpg",
                        Retailer::Myntra,
                    ),
                ],
                shoes: vec![
                    priced_item(
                        rng,
                        "Adidas Stan Smith Sneakers",
                        "Shoes",
                        (4000, 7000),
                        "https://assets.ajio.com/medias/sys_master/root/20230623/Gg9x/649503414d7b3b720c782977/-473Wx593H-469493113-white-MODEL.jpg",
                        Retailer::Flipkart,
                    ),
                    priced_item(
                        rng,
                        "Bata Leather Loafers",
                        "Shoes",
                        (2000, 4000),
                        "https://assets.ajio.com/medias/sys_master/root/20230623/46rE/6494fc874d7b3b720c75ce23/-473Wx593H-464683072-brown-MODEL.jpg",
                        Retailer::Myntra,
                    ),
                ],
            },
            female: ClothingRack {
                tops: vec![
                    priced_item(
                        rng,
                        "Vero Moda Silk Blouse",
                        "Top",
                        (1200, 2200),
                        "https://images.bewakoof.com/t1080/women-s-pink-solid-shirt-580373-1679032582-1.jpg",
                        Retailer::Myntra,
                    ),
                    priced_item(
                        rng,
                        "Zara Off-Shoulder Top",
                        "Top",
                        (1800, 3000),
                        "https://static.zara.net/photos///2024/V/0/1/p/2332/023/250/2/w/428/2332023250_6_1_1.jpg?ts=1708687424368",
                        Retailer::Amazon,
                    ),
                ],
                bottoms: vec![
                    priced_item(
                        rng,
                        "Levi's High-Waisted Skinny Jeans",
                        "Bottom",
                        (2500, 4500),
                        "https://www.levi.in/dw/image/v2/BGFM_PRD/on/demandware.static/-/Sites-LeviMaster-Catalog/en_IN/dwb72b6c73/images/hi-res/188820464/188820464_01_Front.jpg?sw=382&sh=500",
                        Retailer::Flipkart,
                    ),
                    priced_item(
                        rng,
                        "FabIndia A-Line Skirt",
                        "Bottom",
                        (1500, 3000),
                        "https://assets.ajio.com/medias/sys_master/root/20230718/z7v1/64b6b668a9b42d15c9945a1c/-473Wx593H-461118693-multi-MODEL.jpg",
                        Retailer::Myntra,
                    ),
                ],
                shoes: vec![
                    priced_item(
                        rng,
                        "Catwalk Heeled Sandals",
                        "Shoes",
                        (1500, 2800),
                        "https://assets.ajio.com/medias/sys_master/root/20230831/p4iL/64f0ca5dddf7791519f07a67/-473Wx593H-466518596-gold-MODEL.jpg",
                        Retailer::Myntra,
                    ),
                    priced_item(
                        rng,
                        "Clarks Ballet Flats",
                        "Shoes",
                        (2500, 5000),
                        "https://assets.ajio.com/medias/sys_master/root/20230623/t8gS/6494f1504d7b3b720c7324e6/-473Wx593H-463806143-black-MODEL.jpg",
                        Retailer::Amazon,
                    ),
                ],
            },
            other: ClothingRack {
                tops: vec![priced_item(
                    rng,
                    "H&M Oversized Graphic Tee",
                    "Top",
                    (1000, 1800),
                    "https://lp2.hm.com/hmgoepprod?set=quality%5B79%5D%2Csource%5B%2Fef%2F75%2Fef7505537559112953284f18d7f7e91ab195156c.jpg%5D%2Corigin%5Bdam%5D%2Ccategory%5Bmen_tshirtstanks_shortsleeve%5D%2Ctype%5BDESCRIPTIVESTILLLIFE%5D%2Cres%5Bm%5D%2Chmver%5B1%5D&call=url[file:/product/main]",
                    Retailer::Myntra,
                )],
                bottoms: vec![priced_item(
                    rng,
                    "Decathlon Utility Trousers",
                    "Bottom",
                    (1500, 2500),
                    "https://contents.mediadecathlon.com/p2153799/k$93959146522c154388e6ab5305115160/mens-travel-trekking-cargo-trousers-travel-100.jpg?format=auto&quality=40&f=800x800",
                    Retailer::Flipkart,
                )],
                shoes: vec![priced_item(
                    rng,
                    "Converse High-Tops",
                    "Shoes",
                    (3000, 5000),
                    "https://www.converse.in/media/catalog/product/cache/120179a0b01fea158864cb73f15b6781/1/6/162050c_1_2.jpg",
                    Retailer::Amazon,
                )],
            },
        }
    }

    pub(crate) fn rack(&self, gender: Gender) -> &ClothingRack {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Other => &self.other,
        }
    }
}
