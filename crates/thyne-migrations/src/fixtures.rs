//! Baseline and sample documents
//!
//! Every constructor takes the run's clock explicitly, so two runs with
//! the same clock produce the same timestamps. Natural keys (emails,
//! codes, names, session ids) are what makes re-seeding idempotent.

use bson::oid::ObjectId;
use chrono::Duration;
use thyne_core::UtcDateTime;
use thyne_entities::{
    Address, Badge, BadgeRarity, Cart, CartItem, Coupon, DiscountType, GuestSession,
    LoyaltyProgram, LoyaltyTier, LoyaltyTransaction, Order, OrderItem, OrderStatus, PaymentMethod,
    PaymentStatus, Product, ReferralProgram, Review, ShippingAddress, TransactionKind, User,
    Voucher, VoucherKind, Wishlist,
};

/// Bcrypt hash of the shared demo password.
const DEMO_PASSWORD_HASH: &str = "$2a$12$5U6OxbrjSw9qkPUQ4MPTsOz0vAoF088p/d4GJaVNPJRtkBVjTQXq6";

fn at(now: UtcDateTime) -> bson::DateTime {
    bson::DateTime::from_chrono(now)
}

fn days_after(now: UtcDateTime, days: i64) -> bson::DateTime {
    bson::DateTime::from_chrono(now + Duration::days(days))
}

fn days_before(now: UtcDateTime, days: i64) -> bson::DateTime {
    bson::DateTime::from_chrono(now - Duration::days(days))
}

fn hours_before(now: UtcDateTime, hours: i64) -> bson::DateTime {
    bson::DateTime::from_chrono(now - Duration::hours(hours))
}

pub fn users(now: UtcDateTime) -> Vec<User> {
    let ts = at(now);
    vec![
        User {
            id: None,
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: "+1234567890".to_string(),
            password: DEMO_PASSWORD_HASH.to_string(),
            is_active: true,
            is_verified: true,
            is_admin: false,
            addresses: vec![Address {
                id: ObjectId::new(),
                street: "123 Jewelry Lane".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                zip_code: "400001".to_string(),
                country: "IN".to_string(),
                is_default: true,
                created_at: ts,
                updated_at: ts,
            }],
            created_at: ts,
            updated_at: ts,
        },
        User {
            id: None,
            name: "Michael Chen".to_string(),
            email: "michael.chen@example.com".to_string(),
            phone: "+1234567891".to_string(),
            password: DEMO_PASSWORD_HASH.to_string(),
            is_active: true,
            is_verified: true,
            is_admin: false,
            addresses: vec![Address {
                id: ObjectId::new(),
                street: "456 Diamond Street".to_string(),
                city: "Delhi".to_string(),
                state: "Delhi".to_string(),
                zip_code: "110001".to_string(),
                country: "IN".to_string(),
                is_default: true,
                created_at: ts,
                updated_at: ts,
            }],
            created_at: ts,
            updated_at: ts,
        },
        User {
            id: None,
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            phone: "+1234567892".to_string(),
            password: DEMO_PASSWORD_HASH.to_string(),
            is_active: true,
            is_verified: false,
            is_admin: false,
            addresses: vec![],
            created_at: ts,
            updated_at: ts,
        },
    ]
}

fn baseline_products(now: UtcDateTime) -> Vec<Product> {
    let ts = at(now);
    vec![
        Product {
            id: None,
            name: "Diamond Solitaire Ring".to_string(),
            description: "A stunning solitaire diamond ring set in 18K white gold. The center \
                          stone is a brilliant cut diamond with exceptional clarity and sparkle."
                .to_string(),
            price: 85000.0,
            original_price: Some(100000.0),
            images: vec![
                "https://images.unsplash.com/photo-1605100804763-247f67b3557e".to_string(),
                "https://images.unsplash.com/photo-1603561591411-07134e71a2a9".to_string(),
            ],
            category: "Rings".to_string(),
            subcategory: "Engagement".to_string(),
            metal_type: "18K White Gold".to_string(),
            stone_type: Some("Diamond".to_string()),
            weight: Some(3.5),
            size: Some("6".to_string()),
            stock_quantity: 5,
            rating: 4.8,
            review_count: 124,
            tags: vec![
                "diamond".to_string(),
                "engagement".to_string(),
                "solitaire".to_string(),
            ],
            is_available: true,
            is_featured: true,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: None,
            name: "Rose Gold Eternity Band".to_string(),
            description: "Delicate eternity band featuring lab-grown diamonds set in rose gold. \
                          Perfect for stacking or wearing alone."
                .to_string(),
            price: 35000.0,
            original_price: None,
            images: vec!["https://images.unsplash.com/photo-1602751584552-8ba73aad10e1".to_string()],
            category: "Rings".to_string(),
            subcategory: "Wedding".to_string(),
            metal_type: "14K Rose Gold".to_string(),
            stone_type: Some("Lab Diamond".to_string()),
            weight: Some(2.8),
            size: Some("7".to_string()),
            stock_quantity: 8,
            rating: 4.6,
            review_count: 89,
            tags: vec![
                "rose gold".to_string(),
                "wedding".to_string(),
                "eternity".to_string(),
            ],
            is_available: true,
            is_featured: false,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: None,
            name: "Pearl Strand Necklace".to_string(),
            description: "Classic Akoya pearl necklace with 18K gold clasp. Each pearl is \
                          hand-selected for its luster and quality."
                .to_string(),
            price: 55000.0,
            original_price: Some(65000.0),
            images: vec!["https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f".to_string()],
            category: "Necklaces".to_string(),
            subcategory: "Pearl".to_string(),
            metal_type: "18K Yellow Gold".to_string(),
            stone_type: Some("Pearl".to_string()),
            weight: Some(45.0),
            size: None,
            stock_quantity: 3,
            rating: 4.9,
            review_count: 156,
            tags: vec![
                "pearl".to_string(),
                "classic".to_string(),
                "elegant".to_string(),
            ],
            is_available: true,
            is_featured: true,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: None,
            name: "Diamond Stud Earrings".to_string(),
            description: "Classic diamond studs featuring brilliant cut diamonds in a four-prong \
                          setting."
                .to_string(),
            price: 42000.0,
            original_price: None,
            images: vec!["https://images.unsplash.com/photo-1535632066927-ab7c9ab60908".to_string()],
            category: "Earrings".to_string(),
            subcategory: "Studs".to_string(),
            metal_type: "18K White Gold".to_string(),
            stone_type: Some("Diamond".to_string()),
            weight: Some(2.0),
            size: None,
            stock_quantity: 6,
            rating: 4.7,
            review_count: 203,
            tags: vec![
                "diamond".to_string(),
                "studs".to_string(),
                "classic".to_string(),
            ],
            is_available: true,
            is_featured: true,
            created_at: ts,
            updated_at: ts,
        },
    ]
}

fn additional_products(now: UtcDateTime) -> Vec<Product> {
    let ts = at(now);
    vec![
        Product {
            id: None,
            name: "Emerald Tennis Bracelet".to_string(),
            description: "Stunning emerald tennis bracelet featuring lab-grown emeralds set in \
                          14K yellow gold. Perfect for special occasions."
                .to_string(),
            price: 65000.0,
            original_price: Some(75000.0),
            images: vec![
                "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338".to_string(),
                "https://images.unsplash.com/photo-1506630448388-4e683c67ddb0".to_string(),
            ],
            category: "Bracelets".to_string(),
            subcategory: "Tennis".to_string(),
            metal_type: "14K Yellow Gold".to_string(),
            stone_type: Some("Emerald".to_string()),
            weight: Some(15.2),
            size: None,
            stock_quantity: 4,
            rating: 4.7,
            review_count: 67,
            tags: vec![
                "emerald".to_string(),
                "tennis".to_string(),
                "bracelet".to_string(),
                "luxury".to_string(),
            ],
            is_available: true,
            is_featured: true,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: None,
            name: "Sapphire Pendant Necklace".to_string(),
            description: "Elegant sapphire pendant necklace with a brilliant blue sapphire center \
                          stone surrounded by diamonds."
                .to_string(),
            price: 48000.0,
            original_price: None,
            images: vec!["https://images.unsplash.com/photo-1515562141207-7a88fb7ce338".to_string()],
            category: "Necklaces".to_string(),
            subcategory: "Pendant".to_string(),
            metal_type: "18K White Gold".to_string(),
            stone_type: Some("Sapphire".to_string()),
            weight: Some(8.5),
            size: None,
            stock_quantity: 7,
            rating: 4.9,
            review_count: 92,
            tags: vec![
                "sapphire".to_string(),
                "pendant".to_string(),
                "diamonds".to_string(),
                "elegant".to_string(),
            ],
            is_available: true,
            is_featured: false,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: None,
            name: "Ruby Drop Earrings".to_string(),
            description: "Exquisite ruby drop earrings featuring pear-shaped rubies with diamond \
                          accents in rose gold setting."
                .to_string(),
            price: 38000.0,
            original_price: Some(42000.0),
            images: vec!["https://images.unsplash.com/photo-1535632066927-ab7c9ab60908".to_string()],
            category: "Earrings".to_string(),
            subcategory: "Drops".to_string(),
            metal_type: "14K Rose Gold".to_string(),
            stone_type: Some("Ruby".to_string()),
            weight: Some(4.2),
            size: None,
            stock_quantity: 6,
            rating: 4.8,
            review_count: 78,
            tags: vec![
                "ruby".to_string(),
                "drops".to_string(),
                "rose gold".to_string(),
                "elegant".to_string(),
            ],
            is_available: true,
            is_featured: true,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: None,
            name: "Vintage Art Deco Ring".to_string(),
            description: "Beautiful vintage-inspired Art Deco ring with geometric patterns and \
                          diamond accents."
                .to_string(),
            price: 72000.0,
            original_price: None,
            images: vec!["https://images.unsplash.com/photo-1605100804763-247f67b3557e".to_string()],
            category: "Rings".to_string(),
            subcategory: "Vintage".to_string(),
            metal_type: "18K Yellow Gold".to_string(),
            stone_type: Some("Diamond".to_string()),
            weight: Some(5.8),
            size: Some("7".to_string()),
            stock_quantity: 3,
            rating: 4.6,
            review_count: 45,
            tags: vec![
                "vintage".to_string(),
                "art deco".to_string(),
                "diamond".to_string(),
                "unique".to_string(),
            ],
            is_available: true,
            is_featured: false,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: None,
            name: "Gold Chain Necklace".to_string(),
            description: "Classic gold chain necklace perfect for layering or wearing alone. \
                          Available in multiple lengths."
                .to_string(),
            price: 28000.0,
            original_price: None,
            images: vec!["https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f".to_string()],
            category: "Necklaces".to_string(),
            subcategory: "Chain".to_string(),
            metal_type: "14K Yellow Gold".to_string(),
            stone_type: None,
            weight: Some(12.0),
            size: None,
            stock_quantity: 15,
            rating: 4.5,
            review_count: 134,
            tags: vec![
                "gold".to_string(),
                "chain".to_string(),
                "classic".to_string(),
                "layering".to_string(),
            ],
            is_available: true,
            is_featured: false,
            created_at: ts,
            updated_at: ts,
        },
    ]
}

pub fn products(now: UtcDateTime) -> Vec<Product> {
    let mut all = baseline_products(now);
    all.extend(additional_products(now));
    all
}

pub fn coupons(now: UtcDateTime) -> Vec<Coupon> {
    let ts = at(now);
    let percentage = |code: &str,
                      name: &str,
                      description: &str,
                      value: f64,
                      min_amount: f64,
                      max_discount: f64,
                      usage_limit: i32,
                      valid_days: i64| Coupon {
        id: None,
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        discount_type: DiscountType::Percentage,
        value,
        min_amount,
        max_discount: Some(max_discount),
        usage_limit,
        used_count: 0,
        is_active: true,
        valid_from: ts,
        valid_until: days_after(now, valid_days),
        created_at: ts,
        updated_at: ts,
    };

    vec![
        percentage(
            "FIRST10",
            "First Order Discount",
            "10% off on your first order",
            10.0,
            1000.0,
            5000.0,
            1000,
            365,
        ),
        percentage(
            "JEWEL20",
            "Jewelry Special",
            "20% off on jewelry items",
            20.0,
            5000.0,
            10000.0,
            500,
            90,
        ),
        percentage(
            "WELCOME25",
            "Welcome Discount",
            "25% off on your first purchase above ₹2000",
            25.0,
            2000.0,
            8000.0,
            500,
            180,
        ),
        percentage(
            "LUXURY15",
            "Luxury Collection",
            "15% off on luxury jewelry above ₹50000",
            15.0,
            50000.0,
            15000.0,
            200,
            60,
        ),
        Coupon {
            id: None,
            code: "FLAT5000".to_string(),
            name: "Flat Discount".to_string(),
            description: "Flat ₹5000 off on orders above ₹30000".to_string(),
            discount_type: DiscountType::Fixed,
            value: 5000.0,
            min_amount: 30000.0,
            max_discount: None,
            usage_limit: 100,
            used_count: 0,
            is_active: true,
            valid_from: ts,
            valid_until: days_after(now, 30),
            created_at: ts,
            updated_at: ts,
        },
    ]
}

// TODO: resolve the ids of seeded users and products before building the
// review/loyalty/cart/wishlist fixtures below; today they reference
// freshly generated ObjectIds that point at nothing.
pub fn reviews(now: UtcDateTime) -> Vec<Review> {
    let review = |name: &str, rating: i32, comment: &str, days_ago: i64| Review {
        id: None,
        user_id: ObjectId::new(),
        user_name: name.to_string(),
        product_id: ObjectId::new(),
        rating,
        comment: comment.to_string(),
        images: vec![],
        is_verified: true,
        created_at: days_before(now, days_ago),
        updated_at: days_before(now, days_ago),
    };

    vec![
        review(
            "Sarah Johnson",
            5,
            "Absolutely stunning piece! The quality is exceptional and it arrived beautifully \
             packaged. Highly recommend!",
            5,
        ),
        review(
            "Michael Chen",
            4,
            "Beautiful jewelry, exactly as described. Fast shipping and great customer service.",
            3,
        ),
        review(
            "Priya Sharma",
            5,
            "Perfect for my anniversary! My wife loves it. The craftsmanship is outstanding.",
            1,
        ),
    ]
}

pub fn guest_sessions(now: UtcDateTime) -> Vec<GuestSession> {
    let ts = at(now);
    let expires = days_after(now, 30);
    vec![
        GuestSession {
            id: None,
            session_id: format!("guest_{}_001", now.timestamp_millis()),
            email: Some("guest1@example.com".to_string()),
            phone: None,
            name: Some("Guest User 1".to_string()),
            cart_items: vec![],
            created_at: ts,
            last_activity: ts,
            expires_at: expires,
        },
        GuestSession {
            id: None,
            session_id: format!("guest_{}_002", now.timestamp_millis()),
            email: None,
            phone: Some("+1234567899".to_string()),
            name: None,
            cart_items: vec![],
            created_at: ts,
            last_activity: ts,
            expires_at: expires,
        },
    ]
}

pub fn loyalty_programs(now: UtcDateTime) -> Vec<LoyaltyProgram> {
    vec![LoyaltyProgram {
        id: None,
        user_id: ObjectId::new(),
        total_points: 1250,
        current_points: 850,
        tier: LoyaltyTier::Silver,
        login_streak: 5,
        last_login_date: days_before(now, 1),
        total_spent: 125000.0,
        total_orders: 8,
        transactions: vec![
            LoyaltyTransaction {
                id: ObjectId::new(),
                kind: TransactionKind::Earned,
                points: 125,
                description: "Points earned from order #TJ123456".to_string(),
                order_id: Some(ObjectId::new()),
                created_at: days_before(now, 7),
            },
            LoyaltyTransaction {
                id: ObjectId::new(),
                kind: TransactionKind::Redeemed,
                points: -400,
                description: "Redeemed voucher SAVE400".to_string(),
                order_id: None,
                created_at: days_before(now, 3),
            },
        ],
        vouchers: vec![],
        joined_at: days_before(now, 90),
        updated_at: at(now),
    }]
}

pub fn vouchers(now: UtcDateTime) -> Vec<Voucher> {
    let ts = at(now);
    vec![
        Voucher {
            id: None,
            code: "LOYALTY500".to_string(),
            title: "Loyalty Reward Voucher".to_string(),
            description: "₹500 off on your next purchase".to_string(),
            kind: VoucherKind::Loyalty,
            discount_type: DiscountType::Fixed,
            value: 500.0,
            min_order_value: 2000.0,
            max_discount: 500.0,
            points_cost: 500,
            max_redemptions: 1000,
            max_per_user: 1,
            valid_from: ts,
            valid_until: days_after(now, 90),
            usage_conditions: bson::Document::new(),
            is_active: true,
            image_url: String::new(),
            terms: vec![
                "Valid for 90 days from issue date".to_string(),
                "Cannot be combined with other offers".to_string(),
                "Minimum order value ₹2000".to_string(),
            ],
            created_at: ts,
            updated_at: ts,
        },
        Voucher {
            id: None,
            code: "WELCOME1000".to_string(),
            title: "Welcome Bonus Voucher".to_string(),
            description: "₹1000 off on orders above ₹5000".to_string(),
            kind: VoucherKind::Welcome,
            discount_type: DiscountType::Fixed,
            value: 1000.0,
            min_order_value: 5000.0,
            max_discount: 1000.0,
            points_cost: 0,
            max_redemptions: 500,
            max_per_user: 1,
            valid_from: ts,
            valid_until: days_after(now, 365),
            usage_conditions: bson::Document::new(),
            is_active: true,
            image_url: String::new(),
            terms: vec![
                "Valid for new customers only".to_string(),
                "One-time use per customer".to_string(),
                "Minimum order value ₹5000".to_string(),
            ],
            created_at: ts,
            updated_at: ts,
        },
    ]
}

pub fn badges(now: UtcDateTime) -> Vec<Badge> {
    let ts = at(now);
    let badge = |name: &str,
                 description: &str,
                 icon: &str,
                 criteria: &str,
                 rarity: BadgeRarity,
                 points: i64| Badge {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
        icon_url: icon.to_string(),
        criteria: criteria.to_string(),
        rarity,
        points,
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    vec![
        badge(
            "First Purchase",
            "Congratulations on your first purchase!",
            "🛍️",
            "Complete your first order",
            BadgeRarity::Common,
            50,
        ),
        badge(
            "Loyal Customer",
            "Thank you for being a loyal customer!",
            "⭐",
            "Complete 10 orders",
            BadgeRarity::Rare,
            200,
        ),
        badge(
            "Big Spender",
            "You love luxury jewelry!",
            "💎",
            "Spend over ₹100,000",
            BadgeRarity::Epic,
            500,
        ),
        badge(
            "Review Master",
            "Thank you for your valuable reviews!",
            "📝",
            "Submit 20 product reviews",
            BadgeRarity::Rare,
            150,
        ),
    ]
}

pub fn referral_programs(now: UtcDateTime) -> Vec<ReferralProgram> {
    let ts = at(now);
    vec![ReferralProgram {
        id: None,
        is_active: true,
        referrer_reward: 200,
        referee_reward: 100,
        min_order_value: 1000.0,
        max_referrals: 10,
        validity_days: 30,
        description: "Refer friends and earn rewards when they make their first purchase!"
            .to_string(),
        terms: vec![
            "Referee must be a new customer".to_string(),
            "Minimum order value of ₹1000 required".to_string(),
            "Rewards credited after successful order completion".to_string(),
            "Referral link valid for 30 days".to_string(),
            "Maximum 10 referrals per user".to_string(),
        ],
        created_at: ts,
        updated_at: ts,
    }]
}

pub fn carts(now: UtcDateTime) -> Vec<Cart> {
    vec![Cart {
        id: None,
        user_id: Some(ObjectId::new()),
        guest_session_id: None,
        items: vec![CartItem {
            product_id: ObjectId::new(),
            quantity: 1,
            added_at: hours_before(now, 2),
        }],
        discount: 0.0,
        created_at: hours_before(now, 2),
        updated_at: at(now),
    }]
}

pub fn wishlists(now: UtcDateTime) -> Vec<Wishlist> {
    vec![Wishlist {
        id: None,
        user_id: ObjectId::new(),
        product_ids: vec![ObjectId::new(), ObjectId::new()],
        created_at: days_before(now, 7),
        updated_at: at(now),
    }]
}

pub fn orders(now: UtcDateTime) -> Vec<Order> {
    let millis = now.timestamp_millis();
    let address = |street: &str, city: &str, state: &str, zip: &str| ShippingAddress {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip.to_string(),
        country: "IN".to_string(),
    };

    vec![
        Order {
            id: None,
            order_number: format!("TJ{millis}101"),
            user_id: None,
            guest_session_id: Some("guest_seed_1".to_string()),
            items: vec![
                OrderItem {
                    name: "Diamond Ring".to_string(),
                    quantity: 1,
                    price: 20000.0,
                    product_id: ObjectId::new(),
                    image: String::new(),
                },
                OrderItem {
                    name: "Gold Earrings".to_string(),
                    quantity: 1,
                    price: 5000.0,
                    product_id: ObjectId::new(),
                    image: String::new(),
                },
            ],
            shipping_address: address("123 Main St", "Mumbai", "Maharashtra", "400001"),
            payment_method: PaymentMethod::Razorpay,
            payment_status: PaymentStatus::Paid,
            status: OrderStatus::Delivered,
            subtotal: 25000.0,
            tax: 4500.0,
            shipping: 0.0,
            discount: 0.0,
            total: 29500.0,
            created_at: days_before(now, 3),
            updated_at: at(now),
            delivered_at: Some(days_before(now, 1)),
        },
        Order {
            id: None,
            order_number: format!("TJ{millis}102"),
            user_id: None,
            guest_session_id: Some("guest_seed_2".to_string()),
            items: vec![OrderItem {
                name: "Silver Necklace".to_string(),
                quantity: 1,
                price: 15000.0,
                product_id: ObjectId::new(),
                image: String::new(),
            }],
            shipping_address: address("456 Park Ave", "Delhi", "Delhi", "110001"),
            payment_method: PaymentMethod::Razorpay,
            payment_status: PaymentStatus::Paid,
            status: OrderStatus::Processing,
            subtotal: 15000.0,
            tax: 2700.0,
            shipping: 0.0,
            discount: 0.0,
            total: 17700.0,
            created_at: days_before(now, 2),
            updated_at: at(now),
            delivered_at: None,
        },
        Order {
            id: None,
            order_number: format!("TJ{millis}103"),
            user_id: None,
            guest_session_id: Some("guest_seed_3".to_string()),
            items: vec![OrderItem {
                name: "Gold Bracelet".to_string(),
                quantity: 1,
                price: 8000.0,
                product_id: ObjectId::new(),
                image: String::new(),
            }],
            shipping_address: address("789 Garden Rd", "Bangalore", "Karnataka", "560001"),
            payment_method: PaymentMethod::Cod,
            payment_status: PaymentStatus::Pending,
            status: OrderStatus::Pending,
            subtotal: 8000.0,
            tax: 1440.0,
            shipping: 0.0,
            discount: 0.0,
            total: 9440.0,
            created_at: days_before(now, 1),
            updated_at: at(now),
            delivered_at: None,
        },
    ]
}
