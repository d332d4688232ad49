//! Static text-art gallery for the carousel slides.
//!
//! Art is looked up by character name. A name with no art entry is not
//! an error: callers skip the item, matching the silent-omission policy
//! for missing assets.

const GALLERY: &[(&str, &str)] = &[
    (
        "homelander",
        r"
      _____
     /     \
    |  o o  |
     \  ^  /
      '---'
     _/| A |\_
      HOMELANDER",
    ),
    (
        "maeve",
        r"
      .-----.
     /  ^ ^  \
    |    v    |
     \  ---  /
      '-----'
     _/|  Q |\_
      QUEEN MAEVE",
    ),
    (
        "black-noir",
        r"
      .-----.
     /       \
    |  x   x  |
     \       /
      '-----'
     _/| ### |\_
      BLACK NOIR",
    ),
    (
        "a-train",
        r"
      .-----.
     /  > >  \
    |    ~    |
     \  ===  / >>>
      '-----'
     _/|  A  |\_
        A-TRAIN",
    ),
];

/// Look up the art panel for a character name.
pub fn art_for(name: &str) -> Option<&'static str> {
    GALLERY
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, art)| *art)
}
