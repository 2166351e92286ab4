//! Simulated peer responses for the community forum

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{FarmerIdentity, ForumResponse, Topic};

const FIRST_NAMES: &[&str] = &[
    "Rajesh", "Suresh", "Ramesh", "Mahesh", "Prakash", "Dinesh", "Bharat", "Kishan", "Arjun",
    "Gopal",
];

const LAST_NAMES: &[&str] = &[
    "Patel", "Singh", "Yadav", "Kumar", "Sharma", "Verma", "Gupta", "Patil", "Reddy",
    "Choudhary",
];

const VILLAGES: &[&str] = &[
    "Pratappur",
    "Ganeshganj",
    "Ramgarh",
    "Krishnanagar",
    "Bhimpur",
    "Sultanpur",
    "Madhavpur",
    "Sitapur",
    "Gopalnagar",
    "Devgarh",
];

/// Keyword sets checked in order; the first topic with a hit wins.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Irrigation, &["water", "irrigation", "rain", "drought"]),
    (Topic::Pests, &["pest", "insect", "bug", "disease", "aphid"]),
    (Topic::Soil, &["soil", "fertilizer", "compost", "nutrient"]),
    (Topic::Crops, &["crop", "seed", "variety", "plant"]),
    (Topic::Weather, &["weather", "climate", "temperature", "season"]),
    (Topic::Market, &["market", "price", "sell", "profit"]),
    (Topic::Equipment, &["equipment", "tool", "machine", "tractor"]),
];

const FALLBACK_RESPONSES: [&str; 2] = [
    "Based on my experience, I've seen good results with traditional farming methods combined with some modern techniques. Every region has its own unique challenges.",
    "In our area, we follow practices that have been passed down for generations. It's important to adapt to changing conditions while respecting traditional knowledge.",
];

/// Classify a free-text question into a topic bucket
pub fn classify_topic(query: &str) -> Topic {
    let query = query.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General)
}

/// The canned response pool for a topic
pub fn response_pool(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Irrigation => &[
            "I've been using drip irrigation for my crops, and it's saved about 30% water compared to flood irrigation. The initial setup cost is high, but it pays off in 2-3 seasons.",
            "In our village, we still rely on traditional canal irrigation but improved it with scheduled watering. We only irrigate in early morning or evening to reduce evaporation loss.",
            "For water conservation, I've implemented a rainwater harvesting system with small check dams. This has helped maintain groundwater levels even during dry seasons.",
            "After years of farming, I've found that mulching combined with drip irrigation works best in our soil. It reduces water usage by almost 40% and keeps weeds in check too.",
        ],
        Topic::Pests => &[
            "For controlling aphids, I spray a mixture of neem oil and soap solution once a week. This natural remedy has worked better than chemicals for me over the years.",
            "We use companion planting in our fields - marigolds keep many pests away from vegetables. This traditional method has been passed down for generations in our village.",
            "I've had success with trap crops around the main field. Pests attack these sacrificial plants first, protecting our main crop without needing heavy pesticides.",
            "After trying many methods, I now release ladybugs in my fields to control aphids. This biological control has reduced my pesticide use by 70% in the last three years.",
        ],
        Topic::Soil => &[
            "I've been practicing crop rotation for 15 years now, and it has maintained my soil fertility without excessive fertilizers. We rotate legumes with grains every season.",
            "In our village, we prepare our own vermicompost using farm waste. This has improved our soil structure tremendously over the years.",
            "Green manuring has been my secret to maintaining healthy soil. I grow dhaincha before rice cultivation and plow it back into the soil when it flowers.",
            "After years of chemical farming, I switched to organic methods with cow dung manure and jeevamrut. In three years, the soil texture improved significantly with better water retention.",
        ],
        Topic::Crops => &[
            "For wheat cultivation, I've found that early sowing by mid-November gives the best yields in our region. It avoids the terminal heat stress in March-April.",
            "We've started intercropping chickpea with mustard and it's working very well. The mustard repels pests that attack chickpea, and we get two crops from the same land.",
            "In our village, we're now growing quinoa as it needs less water than rice and fetches good market prices. The initial learning curve was difficult but worth it.",
            "After experimenting with different varieties, I've settled on growing native rice varieties using SRI method. The yield is comparable to hybrid varieties but with lower input costs.",
        ],
        Topic::Weather => &[
            "We've developed a system to predict rainfall by observing insect behavior and cloud patterns. It's more accurate for our local conditions than the weather reports.",
            "To deal with unseasonal rains, I've constructed small drainage channels throughout my fields. This simple solution has saved my crops multiple times in the last few years.",
            "In our region, we now plant heat-tolerant varieties as summers are getting hotter. The traditional varieties we used to grow are no longer suitable with changing climate.",
            "We've started using shade nets for vegetable cultivation during peak summer months. The initial investment is recovered within two seasons with better quality produce.",
        ],
        Topic::Market => &[
            "I've joined a farmer producer organization, and we're selling directly to urban consumers. This has increased our profits by eliminating middlemen.",
            "Our village has started a WhatsApp group to share market prices from different mandis. This information helps us decide where to sell our produce for better returns.",
            "I've found that grading and sorting my vegetables before taking them to market increases my profit by at least 15%. Buyers are willing to pay premium for quality produce.",
            "We've started processing part of our produce into pickles and preserves. This value addition has doubled our income compared to selling raw produce.",
        ],
        Topic::Equipment => &[
            "Our village collectively purchased a tractor and implements which we share on rotation. This has reduced our individual costs while making mechanization accessible.",
            "I've modified my traditional plow to work better in our stony soil. This local innovation has increased my work efficiency without expensive equipment.",
            "After trying several options, I invested in a power weeder which has reduced our labor costs by 60%. It was expensive but paid for itself within two seasons.",
            "In our area, we've reverted to using bullocks for some operations as it's more suitable for small terraced fields where tractors can't operate efficiently.",
        ],
        Topic::General => &[
            "I've found that maintaining a farm diary to record all activities and observations has improved my decision making. I refer to previous years' notes before planning.",
            "In our village, we practice the tradition of seed sharing which has helped preserve local varieties. These indigenous seeds are more resilient to local conditions.",
            "After farming for 25 years, I've learned that timing is more important than quantity when it comes to inputs. Applying the right input at the right growth stage makes all the difference.",
            "We've formed a knowledge sharing group in our village where the experienced farmers mentor younger ones. This has helped preserve traditional knowledge while adopting new techniques.",
        ],
    }
}

/// Generate a random farmer with 5 to 34 years of experience
pub fn generate_farmer<R: Rng + ?Sized>(rng: &mut R) -> FarmerIdentity {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or(FIRST_NAMES[0]);
    let last = LAST_NAMES.choose(rng).copied().unwrap_or(LAST_NAMES[0]);
    let village = VILLAGES.choose(rng).copied().unwrap_or(VILLAGES[0]);

    FarmerIdentity {
        name: format!("{} {}", first, last),
        village: village.to_string(),
        experience_years: rng.gen_range(5..35),
    }
}

/// Pick two responses from the topic pool, each attributed to a fresh farmer
pub fn sample_responses<R: Rng + ?Sized>(topic: Topic, rng: &mut R) -> Vec<ForumResponse> {
    let farmers = [generate_farmer(rng), generate_farmer(rng)];

    let mut pool = response_pool(topic).to_vec();
    pool.shuffle(rng);

    farmers
        .into_iter()
        .enumerate()
        .map(|(i, farmer)| {
            let content = pool.get(i).copied().unwrap_or(FALLBACK_RESPONSES[i]);
            ForumResponse::from_farmer(farmer, content)
        })
        .collect()
}

/// Classify a question and sample its responses in one step
pub fn respond_to_question<R: Rng + ?Sized>(query: &str, rng: &mut R) -> (Topic, Vec<ForumResponse>) {
    let topic = classify_topic(query);
    (topic, sample_responses(topic, rng))
}

/// Starting like counter for a new thread
pub fn initial_likes<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classify_each_topic() {
        assert_eq!(classify_topic("How much WATER does paddy need?"), Topic::Irrigation);
        assert_eq!(classify_topic("aphid bugs everywhere"), Topic::Pests);
        assert_eq!(classify_topic("best compost mix"), Topic::Soil);
        assert_eq!(classify_topic("which seed to buy"), Topic::Crops);
        assert_eq!(classify_topic("climate is changing"), Topic::Weather);
        assert_eq!(classify_topic("where to sell onions"), Topic::Market);
        assert_eq!(classify_topic("renting a tractor"), Topic::Equipment);
        assert_eq!(classify_topic("hello everyone"), Topic::General);
    }

    #[test]
    fn test_classify_first_match_wins() {
        // "rain" (irrigation) is checked before "season" (weather)
        assert_eq!(classify_topic("rain this season"), Topic::Irrigation);
        // "disease" (pests) before "soil"
        assert_eq!(classify_topic("soil disease"), Topic::Pests);
    }

    #[test]
    fn test_classify_substring_matching() {
        assert_eq!(classify_topic("rainfall"), Topic::Irrigation);
        assert_eq!(classify_topic("planting"), Topic::Crops);
        assert_eq!(classify_topic("Aphids on my okra"), Topic::Pests);
    }

    #[test]
    fn test_pools_have_four_entries() {
        for topic in Topic::ALL {
            assert_eq!(response_pool(topic).len(), 4, "pool for {}", topic);
        }
    }

    #[test]
    fn test_sample_two_distinct_responses_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let responses = sample_responses(Topic::Pests, &mut rng);
            assert_eq!(responses.len(), 2);
            assert_ne!(responses[0].content, responses[1].content);
            for r in &responses {
                assert!(response_pool(Topic::Pests).contains(&r.content.as_str()));
            }
        }
    }

    #[test]
    fn test_farmer_identity_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let farmer = generate_farmer(&mut rng);
            assert!((5..35).contains(&farmer.experience_years));
            assert!(VILLAGES.contains(&farmer.village.as_str()));
            let (first, last) = farmer.name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
        }
    }

    #[test]
    fn test_same_seed_same_responses() {
        let a = sample_responses(Topic::Market, &mut StdRng::seed_from_u64(3));
        let b = sample_responses(Topic::Market, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_initial_likes_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..200).all(|_| initial_likes(&mut rng) < 10));
    }
}
