use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use model::entities::{account, hero, match_record};

use super::{HeroKey, HeroTally, MatchFilter, StatsSource};
use crate::error::Result;

/// An in-memory snapshot of accounts, heroes and matches.
///
/// Grouping is an explicit scan with a `hero id -> (count, wins)`
/// accumulator, for stores that cannot group on their own.
#[derive(Debug, Clone, Default)]
pub struct MatchLedger {
    accounts: BTreeSet<i32>,
    heroes: HashMap<i32, String>,
    matches: Vec<match_record::Model>,
}

impl MatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from loaded rows.
    pub fn from_models(
        accounts: impl IntoIterator<Item = account::Model>,
        heroes: impl IntoIterator<Item = hero::Model>,
        matches: impl IntoIterator<Item = match_record::Model>,
    ) -> Self {
        Self {
            accounts: accounts.into_iter().map(|a| a.id).collect(),
            heroes: heroes.into_iter().map(|h| (h.id, h.name)).collect(),
            matches: matches.into_iter().collect(),
        }
    }

    pub fn add_account(&mut self, account_id: i32) -> &mut Self {
        self.accounts.insert(account_id);
        self
    }

    pub fn add_hero(&mut self, hero_id: i32, name: impl Into<String>) -> &mut Self {
        self.heroes.insert(hero_id, name.into());
        self
    }

    pub fn add_match(&mut self, record: match_record::Model) -> &mut Self {
        self.matches.push(record);
        self
    }

    fn filtered<'a>(
        &'a self,
        filter: &'a MatchFilter,
    ) -> impl Iterator<Item = &'a match_record::Model> + 'a {
        self.matches.iter().filter(move |m| filter.matches(m))
    }
}

#[async_trait]
impl StatsSource for MatchLedger {
    async fn account_exists(&self, account_id: i32) -> Result<bool> {
        Ok(self.accounts.contains(&account_id))
    }

    async fn count(&self, filter: &MatchFilter) -> Result<u64> {
        Ok(self.filtered(filter).count() as u64)
    }

    async fn group_by_hero(&self, filter: &MatchFilter, key: HeroKey) -> Result<Vec<HeroTally>> {
        let mut tally: HashMap<i32, (u64, u64)> = HashMap::new();
        for record in self.filtered(filter) {
            let entry = tally.entry(key.hero_of(record)).or_insert((0, 0));
            entry.0 += 1;
            if record.is_win() {
                entry.1 += 1;
            }
        }

        // Records pointing at unknown heroes are dropped, like an inner join
        let mut rows: Vec<HeroTally> = tally
            .into_iter()
            .filter_map(|(hero_id, (total, wins))| {
                self.heroes.get(&hero_id).map(|name| HeroTally {
                    hero_id,
                    name: name.clone(),
                    total,
                    wins,
                })
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.hero_id.cmp(&b.hero_id)));
        Ok(rows)
    }
}
