use std::sync::Once;

use crate::services::catalog::Catalog;
use crate::services::collection::{calc_iv_percent, species_id};
use crate::types::{CollectionMember, LeagueStanding};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Member with derived fields filled in. Chain the setters, then `build()`.
pub struct MemberBuilder {
    member: CollectionMember,
}

pub fn member(id: &str, name: &str, pokedex_number: u32) -> MemberBuilder {
    init_logger();
    MemberBuilder {
        member: CollectionMember {
            id: id.to_string(),
            name: name.to_string(),
            form: None,
            species_id: String::new(),
            pokedex_number,
            cp: None,
            level: None,
            atk_iv: None,
            def_iv: None,
            sta_iv: None,
            iv_percent: None,
            is_shiny: false,
            is_lucky: false,
            is_shadow: false,
            is_purified: false,
            is_favorite: false,
            quick_move: None,
            charge_move: None,
            great_league: None,
            ultra_league: None,
            little_league: None,
        },
    }
}

impl MemberBuilder {
    pub fn form(mut self, form: &str) -> Self {
        self.member.form = Some(form.to_string());
        self
    }

    pub fn cp(mut self, cp: u32) -> Self {
        self.member.cp = Some(cp);
        self
    }

    pub fn level(mut self, level: f32) -> Self {
        self.member.level = Some(level);
        self
    }

    pub fn ivs(mut self, atk: u8, def: u8, sta: u8) -> Self {
        self.member.atk_iv = Some(atk);
        self.member.def_iv = Some(def);
        self.member.sta_iv = Some(sta);
        self.member.iv_percent = Some(calc_iv_percent(atk, def, sta));
        self
    }

    /// Aggregate IV% only, individual IVs unknown.
    pub fn iv_percent(mut self, iv: f64) -> Self {
        self.member.iv_percent = Some(iv);
        self
    }

    pub fn quick_move(mut self, quick_move: &str) -> Self {
        self.member.quick_move = Some(quick_move.to_string());
        self
    }

    pub fn great(mut self, rank: u32) -> Self {
        self.member.great_league = Some(LeagueStanding {
            rank: Some(rank),
            evolves_to: None,
        });
        self
    }

    pub fn ultra(mut self, rank: u32) -> Self {
        self.member.ultra_league = Some(LeagueStanding {
            rank: Some(rank),
            evolves_to: None,
        });
        self
    }

    pub fn great_evolves_to(mut self, target: &str) -> Self {
        let standing = self.member.great_league.get_or_insert_with(Default::default);
        standing.evolves_to = Some(target.to_string());
        self
    }

    pub fn shiny(mut self) -> Self {
        self.member.is_shiny = true;
        self
    }

    pub fn lucky(mut self) -> Self {
        self.member.is_lucky = true;
        self
    }

    pub fn shadow(mut self) -> Self {
        self.member.is_shadow = true;
        self
    }

    pub fn purified(mut self) -> Self {
        self.member.is_purified = true;
        self
    }

    pub fn favorite(mut self) -> Self {
        self.member.is_favorite = true;
        self
    }

    pub fn build(mut self) -> CollectionMember {
        self.member.species_id = species_id(&self.member.name, self.member.form.as_deref());
        self.member
    }
}

/// Small catalog covering the species used across unit tests.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
            "machamp": {
                "tier": "A",
                "types": ["Fighting"],
                "raid": { "dominated": true, "types": ["Normal", "Rock", "Ice"] }
            },
            "shadow machamp": {
                "tier": "S",
                "types": ["Fighting"],
                "raid": { "types": ["Normal", "Rock", "Ice"] }
            },
            "medicham": {
                "tier": "A+",
                "types": ["Fighting", "Psychic"],
                "pvp": { "dominated": ["great"], "whyGood": "Bulky and fast." }
            },
            "gengar": {
                "tier": "A",
                "types": ["Ghost", "Poison"],
                "raid": { "types": ["Ghost", "Psychic"] },
                "pvp": { "dominated": ["ultra", "master"] }
            },
            "azumarill": {
                "tier": "A+",
                "types": ["Water", "Fairy"],
                "pvp": { "dominated": ["great", "ultra"] }
            }
        }"#,
    )
    .expect("sample catalog parses")
}
