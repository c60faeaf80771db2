//! Demo fixture for the in-memory store.
//!
//! These six companies seed the demo deployment. They are creation payloads,
//! not stored records: ids, slugs, and timestamps come from the repository's
//! normal derivation, so swapping in a persistent backing store drops this
//! module without touching any operation contract.

use crate::model::NewSupplier;

/// Returns the demo supplier payloads, in display order.
#[must_use]
pub fn demo_suppliers() -> Vec<NewSupplier> {
    vec![
        NewSupplier {
            name: "EcoGreen Materials".to_owned(),
            email: Some("partners@ecogreen.example".to_owned()),
            phone: Some("+1 (555) 123-4567".to_owned()),
            website: Some("https://ecogreen-materials.example".to_owned()),
            description: Some(
                "Sustainable packaging and eco-friendly raw materials supplier with global reach."
                    .to_owned(),
            ),
            city: Some("Portland, OR".to_owned()),
            categories: vec![
                "Packaging".to_owned(),
                "Raw Materials".to_owned(),
                "Sustainable Products".to_owned(),
            ],
            products: vec![
                "Fully compostable packaging solutions made from plant-based materials".to_owned(),
                "High-quality paper products made from 100% post-consumer recycled materials"
                    .to_owned(),
                "Eco-friendly raw materials sourced from renewable and sustainable sources"
                    .to_owned(),
            ],
            ..NewSupplier::default()
        },
        NewSupplier {
            name: "TechParts International".to_owned(),
            email: Some("contact@techparts.example".to_owned()),
            phone: Some("+1 (555) 987-6543".to_owned()),
            website: Some("https://techparts.example".to_owned()),
            description: Some(
                "Premium electronics components and precision manufacturing parts.".to_owned(),
            ),
            city: Some("Munich, Germany".to_owned()),
            categories: vec!["Electronics".to_owned(), "Manufacturing".to_owned()],
            products: vec![
                "High-performance microprocessors and integrated circuits".to_owned(),
                "Precision-engineered connectors and cables".to_owned(),
                "Custom PCB design and manufacturing services".to_owned(),
            ],
            ..NewSupplier::default()
        },
        NewSupplier {
            name: "GlobalTextiles Co.".to_owned(),
            email: Some("sales@globaltextiles.example".to_owned()),
            phone: Some("+1 (555) 456-7890".to_owned()),
            website: Some("https://globaltextiles.example".to_owned()),
            description: Some(
                "High-quality textiles and fabrics from sustainable sources worldwide.".to_owned(),
            ),
            city: Some("Mumbai, India".to_owned()),
            categories: vec!["Textiles".to_owned(), "Fabrics".to_owned()],
            products: vec![
                "Premium organic cotton fabrics".to_owned(),
                "Sustainable bamboo textile products".to_owned(),
                "Custom fabric dyeing and printing services".to_owned(),
            ],
            ..NewSupplier::default()
        },
        NewSupplier {
            name: "Precision Metals".to_owned(),
            email: Some("info@precisionmetals.example".to_owned()),
            phone: Some("+1 (555) 321-0987".to_owned()),
            website: Some("https://precisionmetals.example".to_owned()),
            description: Some(
                "High-grade metal components and custom fabrication services.".to_owned(),
            ),
            city: Some("Detroit, MI".to_owned()),
            categories: vec!["Manufacturing".to_owned(), "Raw Materials".to_owned()],
            products: vec![
                "CNC machined aluminum and steel components".to_owned(),
                "Custom metal fabrication and welding services".to_owned(),
                "High-grade alloy materials for aerospace applications".to_owned(),
            ],
            ..NewSupplier::default()
        },
        NewSupplier {
            name: "Organic Harvest".to_owned(),
            email: Some("orders@organicharvest.example".to_owned()),
            phone: Some("+1 (555) 654-3210".to_owned()),
            website: Some("https://organicharvest.example".to_owned()),
            description: Some(
                "Certified organic food ingredients from sustainable farms.".to_owned(),
            ),
            city: Some("Sacramento, CA".to_owned()),
            categories: vec![
                "Food".to_owned(),
                "Organic".to_owned(),
                "Agriculture".to_owned(),
            ],
            products: vec![
                "Certified organic grains and cereals".to_owned(),
                "Fresh organic vegetables and herbs".to_owned(),
                "Organic dairy products and free-range eggs".to_owned(),
            ],
            ..NewSupplier::default()
        },
        NewSupplier {
            name: "ChemTech Solutions".to_owned(),
            email: Some("support@chemtech.example".to_owned()),
            phone: Some("+1 (555) 789-0123".to_owned()),
            website: Some("https://chemtech.example".to_owned()),
            description: Some(
                "Specialized chemical compounds for industrial and laboratory applications."
                    .to_owned(),
            ),
            city: Some("Boston, MA".to_owned()),
            categories: vec!["Manufacturing".to_owned(), "Raw Materials".to_owned()],
            products: vec![
                "Industrial-grade chemical compounds and solvents".to_owned(),
                "Laboratory reagents and analytical standards".to_owned(),
                "Custom chemical synthesis and formulation services".to_owned(),
            ],
            ..NewSupplier::default()
        },
    ]
}
