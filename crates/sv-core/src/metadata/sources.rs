use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ids::IndexId;

/// Shown for indexes missing from [`SOURCE_TABLE`].
pub const UNKNOWN_SOURCE: &str = "Unknown source";

static SOURCE_TABLE: &[(i64, &str)] = &[
    (0, "H-Magazines"),
    (2, "H-Game CG"),
    (3, "DoujinshiDB"),
    (5, "Pixiv Images"),
    (6, "Pixiv Historical"),
    (8, "Nico Nico Seiga"),
    (9, "Danbooru"),
    (10, "drawr Images"),
    (11, "Nijie Images"),
    (12, "Yande.re"),
    (15, "Shutterstock"),
    (16, "FAKKU"),
    (18, "H-Misc (nhentai)"),
    (19, "2D-Market"),
    (20, "MediBang"),
    (21, "Anime"),
    (22, "H-Anime"),
    (23, "Movies"),
    (24, "Shows"),
    (25, "Gelbooru"),
    (26, "Konachan"),
    (27, "Sankaku Channel"),
    (28, "Anime-Pictures.net"),
    (29, "e621.net"),
    (30, "Idol Complex"),
    (31, "bcy.net Illust"),
    (32, "bcy.net Cosplay"),
    (33, "PortalGraphics.net"),
    (34, "deviantArt"),
    (35, "Pawoo.net"),
    (36, "Madokami"),
    (37, "MangaDex"),
    (38, "H-Misc (e-hentai)"),
    (39, "ArtStation"),
    (40, "FurAffinity"),
    (41, "Twitter"),
    (42, "Furry Network"),
    (43, "Kemono"),
    (44, "Skeb"),
];

static SOURCES: Lazy<HashMap<i64, &'static str>> =
    Lazy::new(|| SOURCE_TABLE.iter().copied().collect());

pub(super) fn source_name(index_id: IndexId) -> Option<&'static str> {
    SOURCES.get(&index_id.value()).copied()
}
