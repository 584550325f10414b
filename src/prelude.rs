pub use crate::cache::SimCache;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::metrics::{LookupMetrics, LookupMetricsSnapshot};
pub use crate::policy::cyclic::CyclicCore;
pub use crate::policy::lfu::LfuCore;
pub use crate::policy::lru::LruCore;
pub use crate::policy::mru::MruCore;
pub use crate::policy::ReplacementPolicy;
pub use crate::slot::{CacheSlot, SlotMeta};
pub use crate::store::hashmap::HashMapBackingStore;
pub use crate::store::traits::BackingStore;
pub use crate::traits::{Admission, SlotPolicy};
