//! Shared test utilities for integration tests

use std::fs;
use std::path::Path;

use crashmart::Registry;

/// A small registry covering the fixture extracts
pub fn registry() -> Registry {
    Registry::from_str(
        r#"
name: damage
dimensions:
  - name: person
    columns:
      - { name: city, type: "text(50)" }
      - { name: age, type: int }
  - name: crash
    columns:
      - { name: crash_type, type: "text(50)" }
  - name: vehicle
    columns:
      - { name: make, type: "text(100)" }
      - { name: vehicle_year, type: int }
measures:
  - { name: damage_amount, type: float }
"#,
    )
    .unwrap()
}

/// Write the three fixture extracts into `dir`
///
/// JC1 and JC2 join cleanly (JC2's unit id needs numeric normalization);
/// JC3 matches no crash and no vehicle and carries the "NaN" damage marker.
pub fn write_extracts(dir: &Path) {
    fs::write(
        dir.join("people.csv"),
        "RD_NO,VEHICLE_ID,CITY,AGE,DAMAGE_AMOUNT\n\
         JC1,1001,CHICAGO,34,1500.5\n\
         JC2,1002.0,EVANSTON,51,300\n\
         JC3,9999,CHICAGO,34,NaN\n",
    )
    .unwrap();
    fs::write(
        dir.join("crashes.csv"),
        "RD_NO,CRASH_TYPE\n\
         JC1,REAR END\n\
         JC2,TURNING\n",
    )
    .unwrap();
    fs::write(
        dir.join("vehicles.csv"),
        "VEHICLE_ID,MAKE,VEHICLE_YEAR\n\
         1001,TOYOTA,2015\n\
         1002,FORD,2012\n",
    )
    .unwrap();
}

/// Read a written mart file verbatim
pub fn read_file(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
