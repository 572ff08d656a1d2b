//! Fixed seed rosters for the idempotent bulk-create operations. Both
//! initializers skip rows that already exist; re-running them is safe.

/// The 24 departments created by the initialize operation.
pub const DEPARTMENT_CATALOG: [&str; 24] = [
    "Cardiology",
    "Neurology",
    "Oncology",
    "Pediatrics",
    "Orthopedics",
    "Radiology",
    "Emergency",
    "ICU",
    "General Medicine",
    "General Surgery",
    "Gynecology",
    "Dermatology",
    "Psychiatry",
    "Urology",
    "Nephrology",
    "Gastroenterology",
    "Pulmonology",
    "Endocrinology",
    "Ophthalmology",
    "ENT",
    "Anesthesiology",
    "Pathology",
    "Physiotherapy",
    "Dental",
];

#[derive(Debug, Clone, Copy)]
pub struct RosterNurse {
    pub nurse_id: &'static str,
    pub nurse_name: &'static str,
    pub primary_department: &'static str,
    pub secondary_department: &'static str,
    pub tertiary_department: &'static str,
}

const fn nurse(
    nurse_id: &'static str,
    nurse_name: &'static str,
    primary_department: &'static str,
    secondary_department: &'static str,
    tertiary_department: &'static str,
) -> RosterNurse {
    RosterNurse {
        nurse_id,
        nurse_name,
        primary_department,
        secondary_department,
        tertiary_department,
    }
}

/// The 24-nurse seed roster. Department triples are pairwise distinct by
/// construction, matching the preference invariant.
pub const NURSE_ROSTER: [RosterNurse; 24] = [
    nurse("N001", "Asha Verma", "ICU", "Emergency", "Cardiology"),
    nurse("N002", "Priya Nair", "Cardiology", "ICU", "General Medicine"),
    nurse("N003", "Meena Joshi", "Pediatrics", "Gynecology", "General Medicine"),
    nurse("N004", "Kavita Rao", "Emergency", "ICU", "Orthopedics"),
    nurse("N005", "Sunita Patel", "Oncology", "Pathology", "General Medicine"),
    nurse("N006", "Rani Gupta", "Neurology", "ICU", "Psychiatry"),
    nurse("N007", "Lata Singh", "Orthopedics", "Physiotherapy", "Emergency"),
    nurse("N008", "Geeta Sharma", "Gynecology", "Pediatrics", "General Surgery"),
    nurse("N009", "Anita Desai", "General Surgery", "Anesthesiology", "ICU"),
    nurse("N010", "Shalini Iyer", "Radiology", "Oncology", "Pathology"),
    nurse("N011", "Pooja Menon", "Dermatology", "General Medicine", "Pathology"),
    nurse("N012", "Nisha Kulkarni", "Psychiatry", "Neurology", "General Medicine"),
    nurse("N013", "Rekha Pillai", "Urology", "Nephrology", "General Surgery"),
    nurse("N014", "Smita Bose", "Nephrology", "Urology", "ICU"),
    nurse("N015", "Divya Reddy", "Gastroenterology", "General Medicine", "Oncology"),
    nurse("N016", "Usha Mehta", "Pulmonology", "ICU", "Emergency"),
    nurse("N017", "Vidya Saxena", "Endocrinology", "General Medicine", "Cardiology"),
    nurse("N018", "Jaya Mishra", "Ophthalmology", "ENT", "General Surgery"),
    nurse("N019", "Seema Chawla", "ENT", "Ophthalmology", "Pediatrics"),
    nurse("N020", "Tara Bhatt", "Anesthesiology", "General Surgery", "ICU"),
    nurse("N021", "Neha Kapoor", "Pathology", "Radiology", "Oncology"),
    nurse("N022", "Ritu Malhotra", "Physiotherapy", "Orthopedics", "Neurology"),
    nurse("N023", "Sarla Dutt", "Dental", "ENT", "General Surgery"),
    nurse("N024", "Maya Thomas", "General Medicine", "Emergency", "Endocrinology"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_and_roster_sizes_match_the_bulk_operations() {
        assert_eq!(DEPARTMENT_CATALOG.len(), 24);
        assert_eq!(NURSE_ROSTER.len(), 24);
    }

    #[test]
    fn roster_ids_are_unique() {
        for (i, a) in NURSE_ROSTER.iter().enumerate() {
            for b in &NURSE_ROSTER[i + 1..] {
                assert_ne!(a.nurse_id, b.nurse_id);
            }
        }
    }

    #[test]
    fn roster_departments_are_pairwise_distinct_and_known() {
        for entry in NURSE_ROSTER {
            let triple = [
                entry.primary_department,
                entry.secondary_department,
                entry.tertiary_department,
            ];
            assert_ne!(triple[0], triple[1], "{}", entry.nurse_id);
            assert_ne!(triple[0], triple[2], "{}", entry.nurse_id);
            assert_ne!(triple[1], triple[2], "{}", entry.nurse_id);
            for department in triple {
                assert!(
                    DEPARTMENT_CATALOG.contains(&department),
                    "{} references unknown department {}",
                    entry.nurse_id,
                    department
                );
            }
        }
    }
}
