//! The standard template table. Every template carries a one-cell dead ring around its life-form,
//! so a match also proves the life-form is isolated from its surroundings.

use super::{Family, TemplateEntry};

pub const STANDARD_TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        family: Family::Block,
        variant: "block",
        rank: 0,
        height: 4,
        width: 4,
        bitmap: concat!(
            "....",
            ".OO.",
            ".OO.",
            "....",
        ),
    },
    TemplateEntry {
        family: Family::Beehive,
        variant: "beehive",
        rank: 1,
        height: 5,
        width: 6,
        bitmap: concat!(
            "......",
            "..OO..",
            ".O..O.",
            "..OO..",
            "......",
        ),
    },
    TemplateEntry {
        family: Family::Loaf,
        variant: "loaf",
        rank: 2,
        height: 6,
        width: 6,
        bitmap: concat!(
            "......",
            "..OO..",
            ".O..O.",
            "..O.O.",
            "...O..",
            "......",
        ),
    },
    TemplateEntry {
        family: Family::Boat,
        variant: "boat",
        rank: 3,
        height: 5,
        width: 5,
        bitmap: concat!(
            ".....",
            ".OO..",
            ".O.O.",
            "..O..",
            ".....",
        ),
    },
    TemplateEntry {
        family: Family::Tub,
        variant: "tub",
        rank: 4,
        height: 5,
        width: 5,
        bitmap: concat!(
            ".....",
            "..O..",
            ".O.O.",
            "..O..",
            ".....",
        ),
    },
    TemplateEntry {
        family: Family::Blinker,
        variant: "blinker-h",
        rank: 5,
        height: 3,
        width: 5,
        bitmap: concat!(
            ".....",
            ".OOO.",
            ".....",
        ),
    },
    TemplateEntry {
        family: Family::Blinker,
        variant: "blinker-v",
        rank: 6,
        height: 5,
        width: 3,
        bitmap: concat!(
            "...",
            ".O.",
            ".O.",
            ".O.",
            "...",
        ),
    },
    TemplateEntry {
        family: Family::Toad,
        variant: "toad-v1",
        rank: 7,
        height: 6,
        width: 6,
        bitmap: concat!(
            "......",
            "...O..",
            ".O..O.",
            ".O..O.",
            "..O...",
            "......",
        ),
    },
    TemplateEntry {
        family: Family::Toad,
        variant: "toad-v2",
        rank: 8,
        height: 4,
        width: 6,
        bitmap: concat!(
            "......",
            "..OOO.",
            ".OOO..",
            "......",
        ),
    },
    TemplateEntry {
        family: Family::Beacon,
        variant: "beacon-v1",
        rank: 9,
        height: 6,
        width: 6,
        bitmap: concat!(
            "......",
            ".OO...",
            ".OO...",
            "...OO.",
            "...OO.",
            "......",
        ),
    },
    TemplateEntry {
        family: Family::Beacon,
        variant: "beacon-v2",
        rank: 10,
        height: 6,
        width: 6,
        bitmap: concat!(
            "......",
            ".OO...",
            ".O....",
            "....O.",
            "...OO.",
            "......",
        ),
    },
    // The four glider phases, in the order one generation leads to the next.
    TemplateEntry {
        family: Family::Glider,
        variant: "glider-v1",
        rank: 11,
        height: 5,
        width: 5,
        bitmap: concat!(
            ".....",
            "..O..",
            "...O.",
            ".OOO.",
            ".....",
        ),
    },
    TemplateEntry {
        family: Family::Glider,
        variant: "glider-v2",
        rank: 12,
        height: 5,
        width: 5,
        bitmap: concat!(
            ".....",
            ".O.O.",
            "..OO.",
            "..O..",
            ".....",
        ),
    },
    TemplateEntry {
        family: Family::Glider,
        variant: "glider-v3",
        rank: 13,
        height: 5,
        width: 5,
        bitmap: concat!(
            ".....",
            "...O.",
            ".O.O.",
            "..OO.",
            ".....",
        ),
    },
    TemplateEntry {
        family: Family::Glider,
        variant: "glider-v4",
        rank: 14,
        height: 5,
        width: 5,
        bitmap: concat!(
            ".....",
            ".O...",
            "..OO.",
            ".OO..",
            ".....",
        ),
    },
    TemplateEntry {
        family: Family::LightweightSpaceship,
        variant: "lwss-v1",
        rank: 15,
        height: 6,
        width: 7,
        bitmap: concat!(
            ".......",
            ".O..O..",
            ".....O.",
            ".O...O.",
            "..OOOO.",
            ".......",
        ),
    },
    TemplateEntry {
        family: Family::LightweightSpaceship,
        variant: "lwss-v2",
        rank: 16,
        height: 6,
        width: 7,
        bitmap: concat!(
            ".......",
            "...OO..",
            ".OO.OO.",
            ".OOOO..",
            "..OO...",
            ".......",
        ),
    },
    TemplateEntry {
        family: Family::LightweightSpaceship,
        variant: "lwss-v3",
        rank: 17,
        height: 6,
        width: 7,
        bitmap: concat!(
            ".......",
            "..OOOO.",
            ".O...O.",
            ".....O.",
            ".O..O..",
            ".......",
        ),
    },
    TemplateEntry {
        family: Family::LightweightSpaceship,
        variant: "lwss-v4",
        rank: 18,
        height: 6,
        width: 7,
        bitmap: concat!(
            ".......",
            "..OO...",
            ".OOOO..",
            ".OO.OO.",
            "...OO..",
            ".......",
        ),
    },
];
