pub mod item;
pub mod snapshot;

/*
 A snapshot is the content of one fridge at one moment.
 Items hang off a snapshot via snapshot_id, one row per distinct description,
 with amount holding how many of that description were observed.
 Items are created and deleted together with their snapshot, never on their own.
 */
