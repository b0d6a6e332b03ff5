use crate::stays::{Review, Stay};

/// Rating awarded by every feedback submission.
pub const FEEDBACK_RATING: i32 = 5;

/// Author name attached to submitted reviews.
pub const FEEDBACK_USER_NAME: &str = "您";

/// Advisory text shown when the advice fetch fails.
pub const FALLBACK_ADVICE: &str = "暫時無法讀取 AI 旅行建議。";

/// Notice returned by the booking confirmation no-op.
pub const BOOKING_CONFIRMED_NOTICE: &str = "預約成功！點數已進入託管（Escrow）狀態。";

/// The fixed seed catalog, including its seed reviews.
pub fn seed_stays() -> Vec<Stay> {
    vec![
        Stay {
            id: "s1".to_string(),
            host_id: "h1".to_string(),
            location: "京都 (傳統町屋)".to_string(),
            description: "在修復後的百年老宅中體驗禪意生活。".to_string(),
            credit_cost: 150,
            image_url:
                "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            available_dates: vec!["2024-06-01".to_string(), "2024-06-15".to_string()],
            reviews: vec![
                Review {
                    id: "r1".to_string(),
                    user_name: "小明".to_string(),
                    rating: 5,
                    comment: "非常有味道的老屋，主人還親自教我們茶道，真的感受到了時間銀行的溫暖。"
                        .to_string(),
                    date: "2024-03-12".to_string(),
                    tags: vec!["文化體驗".to_string(), "房東熱情".to_string()],
                },
                Review {
                    id: "r2".to_string(),
                    user_name: "阿強".to_string(),
                    rating: 4,
                    comment: "環境清幽，雖然稍微偏遠了一點點，但這種寧靜是用點數換不到的價值。"
                        .to_string(),
                    date: "2024-02-28".to_string(),
                    tags: vec!["寧靜".to_string(), "禪意".to_string()],
                },
            ],
        },
        Stay {
            id: "s2".to_string(),
            host_id: "h2".to_string(),
            location: "北海道 (農場寄宿)".to_string(),
            description: "加入我們位於美瑛美麗丘陵的有機農場社區。".to_string(),
            credit_cost: 100,
            image_url:
                "https://images.unsplash.com/photo-1503899036084-c55cdd92da26?q=80&w=1974&auto=format&fit=crop"
                    .to_string(),
            available_dates: vec!["2024-07-10".to_string(), "2024-07-20".to_string()],
            reviews: vec![Review {
                id: "r3".to_string(),
                user_name: "亮亮".to_string(),
                rating: 5,
                comment: "現摘的蔬菜真的太甜了！參與農事勞動讓我重新思考了生產者的價值。"
                    .to_string(),
                date: "2023-11-05".to_string(),
                tags: vec!["有機生活".to_string(), "勞動體驗".to_string()],
            }],
        },
        Stay {
            id: "s3".to_string(),
            host_id: "h3".to_string(),
            location: "東京 (中野當地生活)".to_string(),
            description: "像當地人一樣生活在東京西部的安靜住宅區。".to_string(),
            credit_cost: 200,
            image_url:
                "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?q=80&w=2094&auto=format&fit=crop"
                    .to_string(),
            available_dates: vec!["2024-08-05".to_string(), "2024-08-12".to_string()],
            reviews: vec![],
        },
    ]
}
