use crate::core::field::Timestamp;
use crate::entities::customer::{Customer, CustomerStatus, CustomerType};
use crate::entities::delivery::{DeliveryRoute, RouteStatus};
use crate::entities::product::{Product, ProductCategory};

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    customer_type: CustomerType,
    address: &str,
    total_orders: u32,
    last_order: &str,
    status: CustomerStatus,
    joined_date: &str,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        customer_type,
        address: address.to_string(),
        total_orders,
        last_order: Timestamp::parse(last_order),
        status,
        joined_date: Timestamp::parse(joined_date),
    }
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        customer(
            "CUST-001",
            "Cafe Morning Brew",
            "orders@morningbrew.com",
            "(555) 123-4567",
            CustomerType::Wholesale,
            "123 Coffee Lane, Brewtown, BT 12345",
            156,
            "2024-03-15",
            CustomerStatus::Active,
            "2023-01-15",
        ),
        customer(
            "CUST-002",
            "Harmony Bistro",
            "kitchen@harmonybistro.com",
            "(555) 234-5678",
            CustomerType::Wholesale,
            "456 Restaurant Row, Foodville, FV 67890",
            89,
            "2024-03-14",
            CustomerStatus::Active,
            "2023-03-20",
        ),
        customer(
            "CUST-003",
            "Green Market Grocery",
            "orders@greenmarket.com",
            "(555) 345-6789",
            CustomerType::Corporate,
            "789 Market Street, Freshtown, FT 34567",
            234,
            "2024-03-16",
            CustomerStatus::Active,
            "2023-02-10",
        ),
        customer(
            "CUST-004",
            "Sarah Johnson",
            "sarah.j@email.com",
            "(555) 456-7890",
            CustomerType::Retail,
            "321 Residential Ave, Hometown, HT 89012",
            12,
            "2024-03-10",
            CustomerStatus::Active,
            "2023-06-05",
        ),
        customer(
            "CUST-005",
            "City Center Hotel",
            "kitchen@cityhotel.com",
            "(555) 567-8901",
            CustomerType::Corporate,
            "555 Hotel Plaza, Metropolitan, MT 45678",
            178,
            "2024-03-13",
            CustomerStatus::Inactive,
            "2023-04-15",
        ),
    ]
}

pub fn sample_products() -> Vec<Product> {
    use ProductCategory::*;

    vec![
        Product::new("PRD-001", "Sourdough Loaf", 6.50, Loaf)
            .with_image("https://images.pexels.com/photos/1775043/pexels-photo-1775043.jpeg"),
        Product::new("PRD-002", "Ciabatta Rolls", 4.25, Roll)
            .with_image("https://images.pexels.com/photos/1387075/pexels-photo-1387075.jpeg"),
        Product::new("PRD-003", "Chocolate Croissant", 3.75, Pastry)
            .with_image("https://images.pexels.com/photos/2135/food-france-morning-breakfast.jpg"),
        Product::new("PRD-004", "Artisan Baguette", 5.00, Specialty)
            .with_image("https://images.pexels.com/photos/461060/pexels-photo-461060.jpeg"),
        Product::new("PRD-005", "Whole Wheat Bread", 5.75, Loaf)
            .with_image("https://images.pexels.com/photos/1586947/pexels-photo-1586947.jpeg"),
        Product::new("PRD-006", "Dinner Rolls", 4.50, Roll)
            .with_image("https://images.pexels.com/photos/5419336/pexels-photo-5419336.jpeg"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn route(
    id: &str,
    name: &str,
    driver: &str,
    vehicle: &str,
    status: RouteStatus,
    start_time: &str,
    estimated_duration: &str,
    stops: u32,
    distance: &str,
    orders: &[&str],
) -> DeliveryRoute {
    DeliveryRoute {
        id: id.to_string(),
        name: name.to_string(),
        driver: driver.to_string(),
        vehicle: vehicle.to_string(),
        status,
        start_time: start_time.to_string(),
        estimated_duration: estimated_duration.to_string(),
        stops,
        distance: distance.to_string(),
        orders: orders.iter().map(|id| id.to_string()).collect(),
    }
}

pub fn sample_routes() -> Vec<DeliveryRoute> {
    vec![
        route(
            "ROUTE-001",
            "Downtown Morning Route",
            "John Smith",
            "Van 1 (XYZ-123)",
            RouteStatus::InProgress,
            "06:00 AM",
            "2.5 hours",
            8,
            "12.5 miles",
            &["ORD-2023-001", "ORD-2023-002", "ORD-2023-003"],
        ),
        route(
            "ROUTE-002",
            "Westside Afternoon Route",
            "Sarah Johnson",
            "Van 2 (ABC-789)",
            RouteStatus::Pending,
            "02:00 PM",
            "3 hours",
            10,
            "15.8 miles",
            &["ORD-2023-006", "ORD-2023-007"],
        ),
        route(
            "ROUTE-003",
            "Eastside Morning Route",
            "Mike Wilson",
            "Van 3 (DEF-456)",
            RouteStatus::Completed,
            "07:00 AM",
            "2 hours",
            6,
            "9.3 miles",
            &["ORD-2023-004", "ORD-2023-005"],
        ),
        route(
            "ROUTE-004",
            "Suburban Route",
            "Emily Davis",
            "Van 4 (GHI-789)",
            RouteStatus::Delayed,
            "08:30 AM",
            "4 hours",
            12,
            "22.4 miles",
            &["ORD-2023-008", "ORD-2023-009", "ORD-2023-010"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate_all;

    #[test]
    fn test_catalog_fixtures_validate() {
        assert!(validate_all(&sample_customers()).is_ok());
        assert!(validate_all(&sample_products()).is_ok());
        assert!(validate_all(&sample_routes()).is_ok());
    }

    #[test]
    fn test_sample_products_cover_every_category() {
        let products = sample_products();
        for category in ProductCategory::ALL {
            assert!(
                products.iter().any(|p| p.category == category),
                "no sample product in {category}"
            );
        }
    }

    #[test]
    fn test_route_start_times_parse() {
        assert!(sample_routes().iter().all(|r| r.start_time_of_day().is_some()));
    }
}
