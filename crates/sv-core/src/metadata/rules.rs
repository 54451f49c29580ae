//! Per-index formatting rules.
//!
//! Field names are the ones the upstream search service uses in each
//! index's data block.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ids::IndexId;

/// Separator between `Label: value` lines of rule-based metadata.
pub const METADATA_SEPARATOR: &str = "\n";

/// Separator used by the generic rule for unknown indexes.
pub const GENERIC_DELIMITER: &str = "\n";

/// How the title of an entry is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    /// First present field wins.
    FirstOf(&'static [&'static str]),
    /// Title synthesized from every present field, in order.
    Joined {
        keys: &'static [&'static str],
        separator: &'static str,
    },
}

/// One `Label: value` line; the first present key supplies the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataField {
    pub label: &'static str,
    pub keys: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRule {
    pub title: TitleRule,
    pub metadata: &'static [MetadataField],
}

const fn field(label: &'static str, keys: &'static [&'static str]) -> MetadataField {
    MetadataField { label, keys }
}

const TITLE: TitleRule = TitleRule::FirstOf(&["title"]);
const SOURCE_TITLE: TitleRule = TitleRule::FirstOf(&["source", "title"]);

const MEMBER_ARTWORK: &[MetadataField] = &[field("Member", &["member_name"])];

const BOORU: IndexRule = IndexRule {
    title: TitleRule::Joined {
        keys: &["characters", "material"],
        separator: " from ",
    },
    metadata: &[
        field("Creator", &["creator"]),
        field("Material", &["material"]),
        field("Characters", &["characters"]),
        field("Source", &["source"]),
    ],
};

const ANIME: IndexRule = IndexRule {
    title: SOURCE_TITLE,
    metadata: &[
        field("Part", &["part"]),
        field("Year", &["year"]),
        field("Est. time", &["est_time"]),
        field("AniDB ID", &["anidb_aid"]),
    ],
};

const VIDEO: IndexRule = IndexRule {
    title: SOURCE_TITLE,
    metadata: &[
        field("Part", &["part"]),
        field("Year", &["year"]),
        field("Est. time", &["est_time"]),
        field("IMDb ID", &["imdb_id"]),
    ],
};

const H_MISC: IndexRule = IndexRule {
    title: TitleRule::FirstOf(&["eng_name", "source", "jp_name"]),
    metadata: &[
        field("Japanese title", &["jp_name"]),
        field("Creator", &["creator"]),
    ],
};

const ART_PORTAL: IndexRule = IndexRule {
    title: TITLE,
    metadata: &[field("Author", &["author_name"])],
};

/// Index ids and the rule they share.
static RULE_TABLE: &[(&[i64], IndexRule)] = &[
    (
        &[0],
        IndexRule {
            title: TITLE,
            metadata: &[field("Part", &["part"]), field("Date", &["date"])],
        },
    ),
    (
        &[2],
        IndexRule {
            title: TITLE,
            metadata: &[field("Company", &["company"]), field("getchu ID", &["getchu_id"])],
        },
    ),
    (
        &[3],
        IndexRule {
            title: TITLE,
            metadata: &[field("DoujinshiDB ID", &["ddb_id"])],
        },
    ),
    (
        &[5, 6],
        IndexRule {
            title: TITLE,
            metadata: &[field("Member", &["member_name"]), field("Pixiv ID", &["pixiv_id"])],
        },
    ),
    (
        &[8],
        IndexRule {
            title: TITLE,
            metadata: &[field("Member", &["member_name"]), field("Seiga ID", &["seiga_id"])],
        },
    ),
    (&[9, 12, 25, 26, 27, 28, 29, 30], BOORU),
    (
        &[10],
        IndexRule {
            title: TITLE,
            metadata: &[field("Member", &["member_name"]), field("drawr ID", &["drawr_id"])],
        },
    ),
    (
        &[11],
        IndexRule {
            title: TITLE,
            metadata: &[field("Member", &["member_name"]), field("Nijie ID", &["nijie_id"])],
        },
    ),
    (
        &[16, 19],
        IndexRule {
            title: SOURCE_TITLE,
            metadata: &[field("Creator", &["creator"])],
        },
    ),
    (&[18, 38], H_MISC),
    (
        &[20, 33],
        IndexRule {
            title: TITLE,
            metadata: MEMBER_ARTWORK,
        },
    ),
    (&[21, 22], ANIME),
    (&[23, 24], VIDEO),
    (
        &[31, 32],
        IndexRule {
            title: TITLE,
            metadata: &[field("Member", &["member_name"]), field("bcy ID", &["bcy_id"])],
        },
    ),
    (&[34, 39, 40, 42], ART_PORTAL),
    (
        &[35],
        IndexRule {
            title: TitleRule::FirstOf(&["pawoo_user_display_name", "pawoo_user_username"]),
            metadata: &[
                field("Account", &["pawoo_user_acct"]),
                field("Pawoo ID", &["pawoo_id"]),
            ],
        },
    ),
    (
        &[36],
        IndexRule {
            title: SOURCE_TITLE,
            metadata: &[field("Part", &["part"]), field("Type", &["type"])],
        },
    ),
    (
        &[37],
        IndexRule {
            title: SOURCE_TITLE,
            metadata: &[
                field("Part", &["part"]),
                field("Artist", &["artist"]),
                field("Author", &["author"]),
            ],
        },
    ),
    (
        &[41],
        IndexRule {
            title: TitleRule::FirstOf(&["twitter_user_handle"]),
            metadata: &[
                field("Tweet ID", &["tweet_id"]),
                field("Posted", &["created_at"]),
            ],
        },
    ),
    (
        &[43],
        IndexRule {
            title: TITLE,
            metadata: &[field("User", &["user_name"]), field("Service", &["service_name"])],
        },
    ),
    (
        &[44],
        IndexRule {
            title: TitleRule::FirstOf(&["creator_name", "creator"]),
            metadata: &[field("Author", &["author_name"])],
        },
    ),
];

static RULES: Lazy<HashMap<i64, &'static IndexRule>> = Lazy::new(|| {
    RULE_TABLE
        .iter()
        .flat_map(|(ids, rule)| ids.iter().map(move |id| (*id, rule)))
        .collect()
});

/// Rule for an index, `None` for indexes handled by the generic rule.
pub(super) fn rule_for(index_id: IndexId) -> Option<&'static IndexRule> {
    RULES.get(&index_id.value()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_index_id_is_listed_twice() {
        let mut seen = HashSet::new();
        for (ids, _) in RULE_TABLE {
            for id in *ids {
                assert!(seen.insert(*id), "index {id} has more than one rule");
            }
        }
    }

    #[test]
    fn every_rule_row_has_a_source_name() {
        for (ids, _) in RULE_TABLE {
            for id in *ids {
                assert!(
                    super::super::sources::source_name(IndexId::new(*id)).is_some(),
                    "index {id} has a rule but no source name"
                );
            }
        }
    }
}
