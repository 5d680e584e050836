use gravesite_core::{Capabilities, EntryPolicy, Ground};

pub fn dirt() -> Ground {
    Ground::new('.', "Dirt")
        .with_capabilities(Capabilities::COMBUSTIBLE)
}

/// Combustible but never enterable.
pub fn wall() -> Ground {
    Ground::new('#', "Wall")
        .with_capabilities(Capabilities::COMBUSTIBLE)
        .with_entry(EntryPolicy::Closed)
}

/// Building floor; only actors that can walk on floors may enter.
pub fn floor() -> Ground {
    Ground::new('_', "Floor")
        .with_capabilities(Capabilities::COMBUSTIBLE)
        .with_entry(EntryPolicy::Requires(Capabilities::CAN_WALK_ON_FLOOR))
}

pub fn puddle() -> Ground {
    Ground::new('~', "Puddle")
}

/// Legend used by text layouts.
pub fn ground_for_glyph(glyph: char) -> Option<Ground> {
    match glyph {
        '.' => Some(dirt()),
        '#' => Some(wall()),
        '_' => Some(floor()),
        '~' => Some(puddle()),
        _ => None,
    }
}
