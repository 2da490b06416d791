//! Eyewear frames keyed by face shape.

use rand::Rng;
use styleguru_core::catalog::CatalogItem;

use crate::keys::FaceShape;
use crate::retail::{priced_item, Retailer};

#[derive(Debug)]
pub(crate) struct EyewearTable {
    round: Vec<CatalogItem>,
    square: Vec<CatalogItem>,
    oval: Vec<CatalogItem>,
    heart: Vec<CatalogItem>,
}

impl EyewearTable {
    pub(crate) fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            round: vec![priced_item(
                rng,
                "Lenskart Cat-Eye Frames",
                "Eyewear",
                (1500, 4000),
                "https://static5.lenskart.com/media/catalog/product/pro/1/thumbnail/628x301/9df78eab33525d08d6e5fb8d27136e95/vincent-chase-vc-e13031-c2-eyeglasses_G_5836.jpg",
                Retailer::Amazon,
            )],
            square: vec![priced_item(
                rng,
                "Ray-Ban Round Metal Frames",
                "Eyewear",
                (6000, 10000),
                "https://static5.lenskart.com/media/catalog/product/pro/1/thumbnail/628x301/9df78eab33525d08d6e5fb8d27136e95/ray-ban-rb6378-2904-size-51-black-round-metal-eyeglasses_g_3774_1_1.jpg",
                Retailer::Myntra,
            )],
            oval: vec![priced_item(
                rng,
                "Coolwinks Square Sunglasses",
                "Eyewear",
                (1000, 2500),
                "https://rukminim2.flixcart.com/image/832/832/xif0q/sunglass/c/s/s/-original-imagx43kghvzys4z.jpeg?q=70",
                Retailer::Flipkart,
            )],
            heart: vec![priced_item(
                rng,
                "John Jacobs Rimless Glasses",
                "Eyewear",
                (3000, 6000),
                "https://static5.lenskart.com/media/catalog/product/pro/1/thumbnail/628x301/9df78eab33525d08d6e5fb8d27136e95/john-jacobs-jj-e11516-c1-eyeglasses_G_9421.jpg",
                Retailer::Amazon,
            )],
        }
    }

    pub(crate) fn frames(&self, shape: FaceShape) -> &[CatalogItem] {
        match shape {
            FaceShape::Round => &self.round,
            FaceShape::Square => &self.square,
            FaceShape::Oval => &self.oval,
            FaceShape::Heart => &self.heart,
        }
    }
}
