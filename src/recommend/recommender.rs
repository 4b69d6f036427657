use super::{select, Recommendation, RecommendError, SamplingPolicy, DEFAULT_NUM_RECOMMENDATIONS};
use crate::catalog::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RecommenderSettings {
    pub num_recommendations: usize,
    pub sampling_policy: SamplingPolicy,
    /// Fixed seed for reproducible picks, `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            num_recommendations: DEFAULT_NUM_RECOMMENDATIONS,
            sampling_policy: SamplingPolicy::default(),
            seed: None,
        }
    }
}

/// Owns the random source and the settings, shares the catalog.
pub struct Recommender {
    catalog: Arc<Catalog>,
    settings: RecommenderSettings,
    rng: StdRng,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, settings: RecommenderSettings) -> Recommender {
        let rng = match settings.seed {
            Some(seed) => {
                info!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Recommender {
            catalog,
            settings,
            rng,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn settings(&self) -> &RecommenderSettings {
        &self.settings
    }

    pub fn recommend(&mut self, query: &str) -> Result<Recommendation, RecommendError> {
        select(
            query,
            &self.catalog,
            self.settings.num_recommendations,
            self.settings.sampling_policy,
            &mut self.rng,
        )
    }

    /// Same as [`Recommender::recommend`] with a caller-provided random source.
    pub fn recommend_with<R: Rng + ?Sized>(
        &self,
        query: &str,
        rng: &mut R,
    ) -> Result<Recommendation, RecommendError> {
        select(
            query,
            &self.catalog,
            self.settings.num_recommendations,
            self.settings.sampling_policy,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Song;
    use crate::recommend::MatchTier;

    fn catalog() -> Arc<Catalog> {
        let songs = (0..20)
            .map(|i| Song {
                track_name: format!("Song {}", i),
                artist_name: format!("Artist {}", i % 4),
                streams: i as u64 * 1000,
                released_year: 2000 + i,
                cluster_id: (i % 2) as i64,
            })
            .collect();
        Arc::new(Catalog::from_songs(songs))
    }

    #[test]
    fn test_seeded_recommenders_agree() {
        let settings = RecommenderSettings {
            seed: Some(99),
            ..Default::default()
        };
        let mut a = Recommender::new(catalog(), settings.clone());
        let mut b = Recommender::new(catalog(), settings);

        for query in ["song 3", "artist 1", "nothing"] {
            let ra = a.recommend(query).unwrap();
            let rb = b.recommend(query).unwrap();
            assert_eq!(ra.tier, rb.tier);
            assert_eq!(ra.songs, rb.songs);
        }
    }

    #[test]
    fn test_default_limit() {
        let mut recommender = Recommender::new(catalog(), RecommenderSettings::default());
        assert_eq!(recommender.settings().sampling_policy, SamplingPolicy::Cap);
        let result = recommender.recommend("song 4").unwrap();
        assert_eq!(result.tier, MatchTier::Track);
        assert_eq!(result.songs.len(), DEFAULT_NUM_RECOMMENDATIONS);
        assert_eq!(result.songs[0].track_name, "Song 4");
    }

    #[test]
    fn test_shared_catalog_across_threads() {
        let catalog = catalog();
        let handles: Vec<_> = (0..4)
            .map(|seed| {
                let recommender = Recommender::new(
                    catalog.clone(),
                    RecommenderSettings {
                        seed: Some(seed),
                        ..Default::default()
                    },
                );
                std::thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed);
                    recommender.recommend_with("artist 2", &mut rng).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.tier, MatchTier::Artist);
            assert_eq!(result.songs.len(), 5);
        }
    }
}
