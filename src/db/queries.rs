pub const CREATE_RIDES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Rides (
    rideID INTEGER PRIMARY KEY AUTOINCREMENT,
    startLat REAL NOT NULL,
    startLong REAL NOT NULL,
    endLat REAL NOT NULL,
    endLong REAL NOT NULL,
    riderName TEXT NOT NULL,
    driverName TEXT NOT NULL,
    driverVehicle TEXT NOT NULL,
    created DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const INSERT_RIDE: &str = r#"
INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
RETURNING rideID, startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle, created;
"#;

pub const SELECT_RIDES_PAGE: &str = r#"
SELECT rideID, startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle, created
FROM Rides
ORDER BY rideID ASC
LIMIT ?1 OFFSET ?2;
"#;

pub const SELECT_RIDE_BY_ID: &str = r#"
SELECT rideID, startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle, created
FROM Rides
WHERE rideID = ?1;
"#;
