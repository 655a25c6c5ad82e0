//! Built-in demo coupon set, written to `coupons.json` on first read so the
//! storefront renders something before a real feed is wired up.

use shared_types::{Coupon, CouponCategory};

pub fn demo_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            id: "cup-001".to_string(),
            business_id: "biz-cafe-centro".to_string(),
            title: "2x1 en café de especialidad".to_string(),
            description: "Llévate dos bebidas calientes por el precio de una.".to_string(),
            discount: "2x1".to_string(),
            image: "https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=600&h=400&fit=crop"
                .to_string(),
            terms: "Válido de lunes a jueves. No acumulable con otras promociones.".to_string(),
            expiry_date: "2026-12-31".to_string(),
            category: CouponCategory::Food,
            redemption_code: "CAFE-2X1".to_string(),
            is_new: true,
            is_active: true,
        },
        Coupon {
            id: "cup-002".to_string(),
            business_id: "biz-libreria-sol".to_string(),
            title: "20% en toda la librería".to_string(),
            description: "Descuento en libros, papelería y juegos de mesa.".to_string(),
            discount: "-20%".to_string(),
            image: "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=600&h=400&fit=crop"
                .to_string(),
            terms: "Presenta el cupón en caja antes de pagar.".to_string(),
            expiry_date: "2026-10-15".to_string(),
            category: CouponCategory::Retail,
            redemption_code: "LIBROS-20".to_string(),
            is_new: false,
            is_active: true,
        },
        Coupon {
            id: "cup-003".to_string(),
            business_id: "biz-taller-norte".to_string(),
            title: "Cambio de aceite a mitad de precio".to_string(),
            description: "Incluye revisión de niveles y presión de llantas.".to_string(),
            discount: "-50%".to_string(),
            image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?w=600&h=400&fit=crop"
                .to_string(),
            terms: "Solo con cita previa. Un cupón por vehículo.".to_string(),
            expiry_date: "2026-09-30".to_string(),
            category: CouponCategory::Services,
            redemption_code: "ACEITE-50".to_string(),
            is_new: false,
            is_active: true,
        },
        Coupon {
            id: "cup-004".to_string(),
            business_id: "biz-cine-plaza".to_string(),
            title: "Entrada + palomitas por $99".to_string(),
            description: "Funciones de martes y miércoles en cualquier sala.".to_string(),
            discount: "$99".to_string(),
            image: "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba?w=600&h=400&fit=crop"
                .to_string(),
            terms: "Sujeto a disponibilidad de sala.".to_string(),
            expiry_date: "2026-11-20".to_string(),
            category: CouponCategory::Entertainment,
            redemption_code: "CINE-99".to_string(),
            is_new: true,
            is_active: true,
        },
    ]
}
