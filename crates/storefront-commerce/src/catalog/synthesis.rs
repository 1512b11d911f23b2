//! Turning upstream posts into products.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Category, Product, SourcePost};
use crate::config::SynthesisMode;

/// Lowest synthesized price.
pub const PRICE_MIN: u32 = 20;

/// Highest synthesized price (inclusive).
pub const PRICE_MAX: u32 = 519;

/// Placeholder image URL for a product id.
pub fn image_url(host: &str, id: impl std::fmt::Display) -> String {
    format!("https://{}/300/200?random={}", host, id)
}

/// Fabricates the display fields the post source does not carry.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    image_host: String,
    mode: SynthesisMode,
}

impl Synthesizer {
    /// Create a synthesizer.
    pub fn new(image_host: impl Into<String>, mode: SynthesisMode) -> Self {
        Self {
            image_host: image_host.into(),
            mode,
        }
    }

    /// Build a product from a source record.
    pub fn synthesize(&self, post: &SourcePost) -> Product {
        match self.mode {
            SynthesisMode::Random => self.build(post, &mut rand::thread_rng()),
            SynthesisMode::StableById => {
                self.build(post, &mut StdRng::seed_from_u64(post.id.get()))
            }
        }
    }

    fn build<R: Rng + ?Sized>(&self, post: &SourcePost, rng: &mut R) -> Product {
        let price = rng.gen_range(PRICE_MIN..=PRICE_MAX);
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        Product {
            id: post.id,
            title: post.title.clone(),
            price,
            category,
            image: image_url(&self.image_host, post.id),
            description: post.body.clone(),
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new("picsum.photos", SynthesisMode::Random)
    }
}
