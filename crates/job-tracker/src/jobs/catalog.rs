use serde::Serialize;

use crate::applicants::Region;

/// Static job listing shown on the job board.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub key: &'static str,
    pub title: &'static str,
    pub employer: &'static str,
    pub location: &'static str,
    pub region: Region,
    pub keywords: &'static [&'static str],
}

#[derive(Debug)]
pub struct JobCatalog {
    listings: Vec<JobListing>,
}

impl JobCatalog {
    pub fn standard() -> Self {
        Self {
            listings: standard_listings(),
        }
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn find(&self, key: &str) -> Option<&JobListing> {
        self.listings.iter().find(|listing| listing.key == key)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for JobCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_listings() -> Vec<JobListing> {
    vec![
        JobListing {
            key: "retail_sales_associate",
            title: "Sales Associate",
            employer: "Iloilo Commerce Center",
            location: "Iloilo City",
            region: Region::WesternVisayas,
            keywords: &["sales", "retail", "cashier", "store", "merchandising"],
        },
        JobListing {
            key: "bpo_customer_service",
            title: "Customer Service Representative",
            employer: "Visayas Contact Hub",
            location: "Iloilo Business Park",
            region: Region::National,
            keywords: &[
                "customer service",
                "call center",
                "bpo",
                "csr",
                "chat support",
            ],
        },
        JobListing {
            key: "hospitality_barista",
            title: "Barista and Food Service Crew",
            employer: "Molo Cafe Collective",
            location: "Molo, Iloilo City",
            region: Region::WesternVisayas,
            keywords: &["barista", "coffee", "food", "restaurant", "crew", "hospitality"],
        },
        JobListing {
            key: "it_support_technician",
            title: "IT Support Technician",
            employer: "Panay Digital Works",
            location: "Mandurriao, Iloilo City",
            region: Region::WesternVisayas,
            keywords: &["it", "computer", "helpdesk", "network", "software", "programming"],
        },
        JobListing {
            key: "construction_laborer",
            title: "Construction Laborer",
            employer: "Jaro Builders Cooperative",
            location: "Jaro, Iloilo City",
            region: Region::WesternVisayas,
            keywords: &["construction", "carpentry", "mason", "welder", "welding"],
        },
        JobListing {
            key: "farm_technician",
            title: "Farm Technician",
            employer: "Guimaras Agri Ventures",
            location: "Jordan, Guimaras",
            region: Region::WesternVisayas,
            keywords: &["farm", "farming", "agriculture", "crops", "fisheries", "livestock"],
        },
        JobListing {
            key: "healthcare_caregiver",
            title: "Caregiver and Nursing Aide",
            employer: "Western Visayas Care Clinic",
            location: "Bacolod City",
            region: Region::WesternVisayas,
            keywords: &["caregiver", "nursing", "health", "healthcare", "patient"],
        },
        JobListing {
            key: "logistics_delivery_rider",
            title: "Delivery Rider",
            employer: "Panay Express Logistics",
            location: "Roxas City",
            region: Region::WesternVisayas,
            keywords: &["delivery", "rider", "driver", "logistics", "warehouse", "courier"],
        },
        JobListing {
            key: "office_clerk",
            title: "Office Clerk",
            employer: "Provincial Records Office",
            location: "Iloilo City",
            region: Region::National,
            keywords: &["office", "encoder", "data entry", "admin", "secretary"],
        },
    ]
}
