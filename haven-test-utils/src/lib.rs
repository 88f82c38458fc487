//! HAVEN Test Utilities
//!
//! Centralized test infrastructure for the HAVEN workspace:
//! - Proptest generators for listing and swarm-task types
//! - Deterministic fixtures for common scenarios

pub use haven_core::{
    FilterCriteria, ListingStatus, Property, PropertyType, SortKey, Subtask, SwarmTask,
    TaskProgress, TaskStatus,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating HAVEN entity types.

    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    /// Generate a random UUID.
    pub fn arb_uuid() -> impl Strategy<Value = Uuid> {
        any::<[u8; 16]>().prop_map(Uuid::from_bytes)
    }

    /// Generate a PropertyType variant.
    pub fn arb_property_type() -> impl Strategy<Value = PropertyType> {
        prop_oneof![
            Just(PropertyType::SingleFamily),
            Just(PropertyType::Condo),
            Just(PropertyType::Townhouse),
            Just(PropertyType::MultiFamily),
            Just(PropertyType::Land),
        ]
    }

    /// Generate a ListingStatus variant.
    pub fn arb_listing_status() -> impl Strategy<Value = ListingStatus> {
        prop_oneof![
            Just(ListingStatus::Active),
            Just(ListingStatus::New),
            Just(ListingStatus::Pending),
            Just(ListingStatus::Sold),
        ]
    }

    /// Generate a SortKey variant.
    pub fn arb_sort_key() -> impl Strategy<Value = SortKey> {
        prop_oneof![
            Just(SortKey::PriceAsc),
            Just(SortKey::PriceDesc),
            Just(SortKey::Newest),
            Just(SortKey::Beds),
            Just(SortKey::Sqft),
        ]
    }

    /// Generate a TaskStatus variant.
    pub fn arb_task_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::Queued),
            Just(TaskStatus::Running),
            Just(TaskStatus::Completed),
            Just(TaskStatus::Failed),
        ]
    }

    /// Generate a valid Property (finite, non-negative numerics).
    pub fn arb_property() -> impl Strategy<Value = Property> {
        (
            "[a-z0-9]{4,12}",
            "[0-9]{1,4} [A-Z][a-z]{3,10} (St|Ave|Ln|Ct)",
            prop_oneof![
                Just("Richland".to_string()),
                Just("Kennewick".to_string()),
                Just("Pasco".to_string()),
                Just("West Richland".to_string()),
            ],
            arb_property_type(),
            arb_listing_status(),
            0.0f64..2_000_000.0,
            0u32..8,
            (100u32..8_000, 0u32..365),
            "[a-z ]{0,40}",
            prop::collection::vec(
                prop_oneof![
                    Just("garage".to_string()),
                    Just("fireplace".to_string()),
                    Just("pool".to_string()),
                    Just("waterfront".to_string()),
                    Just("solar panels".to_string()),
                ],
                0..4,
            ),
        )
            .prop_map(
                |(
                    id,
                    address,
                    city,
                    property_type,
                    status,
                    price,
                    beds,
                    (sqft, days_on_market),
                    description,
                    features,
                )| Property {
                    id,
                    address,
                    city,
                    property_type,
                    status,
                    price,
                    beds,
                    sqft,
                    days_on_market,
                    description,
                    features,
                },
            )
    }

    /// Generate a FilterCriteria with an arbitrary mix of constraints.
    pub fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            prop_oneof![Just(String::new()), "[a-z]{1,8}".prop_map(String::from)],
            prop::option::of(prop_oneof![
                Just("Richland".to_string()),
                Just("Kennewick".to_string()),
                Just("Pasco".to_string()),
            ]),
            prop::option::of(arb_property_type()),
            prop::option::of(arb_listing_status()),
            prop::option::of(0.0f64..1_000_000.0),
            prop::option::of(0.0f64..2_000_000.0),
            0u32..5,
        )
            .prop_map(
                |(query, city, property_type, status, min_price, max_price, min_beds)| {
                    FilterCriteria {
                        query,
                        city,
                        property_type,
                        status,
                        min_price,
                        max_price,
                        min_beds,
                    }
                },
            )
    }

    /// Generate a Subtask; progress honors the 0-100 contract.
    pub fn arb_subtask() -> impl Strategy<Value = Subtask> {
        (
            arb_uuid(),
            prop_oneof![
                Just("scout".to_string()),
                Just("appraiser".to_string()),
                Just("historian".to_string()),
                Just("synthesizer".to_string()),
            ],
            "[a-z]{3,10}-[a-z]{3,10}",
            "[a-z ]{5,40}",
            arb_task_status(),
            0u8..=100,
        )
            .prop_map(|(id, agent_name, action, description, status, progress)| Subtask {
                id,
                agent_name,
                action,
                description,
                status,
                progress,
                duration_ms: status.is_terminal().then_some(1_500),
            })
    }

    /// Generate a SwarmTask with 0..8 subtasks.
    pub fn arb_swarm_task() -> impl Strategy<Value = SwarmTask> {
        (
            arb_uuid(),
            "[a-z ]{5,60}",
            arb_task_status(),
            prop::collection::vec(arb_subtask(), 0..8),
            prop::option::of("[a-z ]{5,60}".prop_map(String::from)),
        )
            .prop_map(|(id, query, status, subtasks, synthesized_result)| SwarmTask {
                id,
                query,
                status,
                subtasks,
                synthesized_result,
                total_duration_ms: status.is_terminal().then_some(12_000),
            })
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Deterministic fixtures for tests that need known data.

    use super::*;
    use uuid::Uuid;

    fn listing(
        id: &str,
        address: &str,
        city: &str,
        property_type: PropertyType,
        status: ListingStatus,
        price: f64,
        beds: u32,
        sqft: u32,
        days_on_market: u32,
    ) -> Property {
        Property {
            id: id.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            property_type,
            status,
            price,
            beds,
            sqft,
            days_on_market,
            description: "well maintained".to_string(),
            features: vec!["garage".to_string()],
        }
    }

    /// Small known inventory spanning every type and status.
    pub fn sample_properties() -> Vec<Property> {
        vec![
            listing(
                "p1",
                "412 Birchwood Ln",
                "Richland",
                PropertyType::SingleFamily,
                ListingStatus::Active,
                325_000.0,
                3,
                1_840,
                12,
            ),
            listing(
                "p2",
                "88 Harbor View Dr",
                "Kennewick",
                PropertyType::Condo,
                ListingStatus::New,
                215_000.0,
                2,
                980,
                2,
            ),
            listing(
                "p3",
                "1520 Sagebrush Rd",
                "Pasco",
                PropertyType::Townhouse,
                ListingStatus::Pending,
                289_000.0,
                3,
                1_420,
                33,
            ),
            listing(
                "p4",
                "7 Orchard Flats",
                "Richland",
                PropertyType::MultiFamily,
                ListingStatus::Sold,
                610_000.0,
                6,
                3_900,
                90,
            ),
            listing(
                "p5",
                "Parcel 19, Vineyard Bench",
                "West Richland",
                PropertyType::Land,
                ListingStatus::Active,
                95_000.0,
                0,
                0,
                150,
            ),
        ]
    }

    /// A running task with one completed, one running, one queued subtask.
    pub fn sample_task() -> SwarmTask {
        let subtask = |n: u128, agent: &str, action: &str, status: TaskStatus, progress: u8| {
            Subtask {
                id: Uuid::from_u128(n),
                agent_name: agent.to_string(),
                action: action.to_string(),
                description: format!("{} step", action),
                status,
                progress,
                duration_ms: status.is_terminal().then_some(2_000),
            }
        };
        SwarmTask {
            id: Uuid::from_u128(0xBEEF),
            query: "find family homes under 400k near good schools".to_string(),
            status: TaskStatus::Running,
            subtasks: vec![
                subtask(1, "scout", "search-listings", TaskStatus::Completed, 100),
                subtask(2, "appraiser", "estimate-value", TaskStatus::Running, 60),
                subtask(3, "synthesizer", "merge-findings", TaskStatus::Queued, 0),
            ],
            synthesized_result: None,
            total_duration_ms: None,
        }
    }
}
