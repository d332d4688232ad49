//! Assembles the deck of carousel items shown by the UI.

use crate::carousel::assets;
use crate::carousel::item::{
    ATrainItem, BlackNoirItem, CarouselItem, HomelanderItem, MaeveItem,
};

pub struct CarouselItemProvider;

impl CarouselItemProvider {
    /// The full deck, in display order.
    ///
    /// Items whose art asset cannot be resolved are silently dropped
    /// from the deck rather than surfaced as an error. The progress
    /// bar derives its segment count from the length of this list.
    pub fn items() -> Vec<Box<dyn CarouselItem>> {
        let deck: Vec<Box<dyn CarouselItem>> = vec![
            Box::new(HomelanderItem),
            Box::new(MaeveItem),
            Box::new(BlackNoirItem),
            Box::new(ATrainItem),
        ];
        deck.into_iter()
            .filter(|item| assets::art_for(item.name()).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselItemProvider;

    #[test]
    fn deck_has_four_slides() {
        assert_eq!(CarouselItemProvider::items().len(), 4);
    }

    #[test]
    fn deck_order_is_stable() {
        let names: Vec<&str> = CarouselItemProvider::items()
            .iter()
            .map(|item| item.name())
            .collect();
        assert_eq!(names, ["homelander", "maeve", "black-noir", "a-train"]);
    }
}
