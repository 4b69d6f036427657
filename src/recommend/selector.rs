use super::{sample_pool, MatchTier, Recommendation, RecommendError, SamplingPolicy};
use crate::catalog::{Catalog, SongCard};
use rand::Rng;
use tracing::debug;

pub const DEFAULT_NUM_RECOMMENDATIONS: usize = 7;

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn cards(catalog: &Catalog, indices: &[usize]) -> Vec<SongCard> {
    indices
        .iter()
        .filter_map(|i| catalog.get(*i))
        .map(SongCard::from)
        .collect()
}

/// Picks up to `limit` songs for `query`.
///
/// The first rule that matches wins:
/// 1. the query is a track title: that song first, then random songs from its cluster
///    (the song itself may be picked again);
/// 2. the query is an artist name: random songs by that artist;
/// 3. otherwise random songs from the whole catalog.
///
/// Matching is exact after lowercasing, the query is also trimmed.
pub fn select<R: Rng + ?Sized>(
    query: &str,
    catalog: &Catalog,
    limit: usize,
    policy: SamplingPolicy,
    rng: &mut R,
) -> Result<Recommendation, RecommendError> {
    if limit == 0 {
        return Err(RecommendError::InvalidLimit);
    }
    let query = normalize_query(query);
    if query.is_empty() {
        return Err(RecommendError::EmptyQuery);
    }
    let songs = catalog.songs();

    if let Some(anchor_index) = songs
        .iter()
        .position(|s| s.track_name.to_lowercase() == query)
    {
        let anchor = &songs[anchor_index];
        // The pool is the whole cluster, the anchor row included.
        let pool: Vec<usize> = songs
            .iter()
            .enumerate()
            .filter(|(_, s)| s.cluster_id == anchor.cluster_id)
            .map(|(i, _)| i)
            .collect();
        debug!(
            "Track match on row {}, cluster {} has {} songs",
            anchor_index,
            anchor.cluster_id,
            pool.len()
        );

        let picked = sample_pool(rng, &pool, limit - 1, policy, MatchTier::Track)?;
        let mut out = Vec::with_capacity(picked.len() + 1);
        out.push(SongCard::from(anchor));
        out.extend(cards(catalog, &picked));
        return Ok(Recommendation {
            tier: MatchTier::Track,
            matched_name: Some(anchor.track_name.clone()),
            songs: out,
        });
    }

    let artist_matches: Vec<usize> = songs
        .iter()
        .enumerate()
        .filter(|(_, s)| s.artist_name.to_lowercase() == query)
        .map(|(i, _)| i)
        .collect();
    if let Some(first) = artist_matches.first() {
        debug!("Artist match with {} songs", artist_matches.len());
        let amount = artist_matches.len().min(limit);
        let picked = sample_pool(rng, &artist_matches, amount, policy, MatchTier::Artist)?;
        return Ok(Recommendation {
            tier: MatchTier::Artist,
            matched_name: Some(songs[*first].artist_name.clone()),
            songs: cards(catalog, &picked),
        });
    }

    debug!("No match for \"{}\", sampling the whole catalog", query);
    let everything: Vec<usize> = (0..songs.len()).collect();
    let picked = sample_pool(rng, &everything, limit, policy, MatchTier::Fallback)?;
    Ok(Recommendation {
        tier: MatchTier::Fallback,
        matched_name: None,
        songs: cards(catalog, &picked),
    })
}
