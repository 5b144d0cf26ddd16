use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::store::CollectionStore;
use crate::types::{Movie, User};

/// Process-wide state: the single owner of both collections.
///
/// Every resolver reads and mutates the same collections through a
/// shared reference to this value. Users sit behind a lock because
/// mutations and the favorite-movie seeding write to them; movies are
/// read-only for the process lifetime. The random source is held here so
/// tests can replace it with a seeded one.
pub struct AppState {
    pub users: RwLock<Vec<User>>,
    pub movies: Vec<Movie>,
    pub rng: Mutex<StdRng>,
    pub store: Box<dyn CollectionStore>,
}

/// Loads both collections eagerly. A missing or malformed file fails
/// startup; nothing is retried or defaulted.
pub fn init_app_state(store: Box<dyn CollectionStore>) -> anyhow::Result<AppState> {
    let users = store.load_users()?;
    let movies = store.load_movies()?;
    Ok(AppState {
        users: RwLock::new(users),
        movies,
        rng: Mutex::new(StdRng::from_entropy()),
        store,
    })
}
