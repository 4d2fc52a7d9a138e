use crate::types::{Article, City, Package};

fn city(name: &str, state: &str, description: &str) -> City {
    City {
        name: name.to_string(),
        state: state.to_string(),
        country: "India".to_string(),
        description: description.to_string(),
        is_featured: true,
    }
}

fn article(title: &str, slug: &str, content: &str, excerpt: &str, author: &str) -> Article {
    Article {
        title: title.to_string(),
        slug: slug.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        is_published: true,
        is_featured: true,
        city: None,
    }
}

fn package(name: &str, description: &str, duration_days: u32, base_price: u32) -> Package {
    Package {
        name: name.to_string(),
        description: description.to_string(),
        duration_days,
        base_price,
        is_featured: true,
        city: None,
    }
}

pub fn sample_cities() -> Vec<City> {
    vec![
        city(
            "Ayodhya",
            "Uttar Pradesh",
            "The birthplace of Lord Rama, Ayodhya is one of the seven sacred cities in Hinduism. Experience divine spirituality at the magnificent Ram Mandir and explore ancient temples along the sacred Sarayu River.",
        ),
        city(
            "Varanasi",
            "Uttar Pradesh",
            "One of the world's oldest continuously inhabited cities, Varanasi is the spiritual capital of India. Witness the mesmerizing Ganga Aarti and experience the eternal cycle of life and death on the sacred ghats.",
        ),
        city(
            "Rishikesh",
            "Uttarakhand",
            "Known as the 'Yoga Capital of the World', Rishikesh offers spiritual awakening amidst the Himalayan foothills. Practice yoga, meditation, and experience the divine energy of the holy Ganges.",
        ),
        city(
            "Haridwar",
            "Uttarakhand",
            "Gateway to the gods, Haridwar is where the sacred Ganges descends from the Himalayas to the plains. Participate in the evening Ganga Aarti at Har Ki Pauri and feel the divine presence.",
        ),
        city(
            "Mathura",
            "Uttar Pradesh",
            "The birthplace of Lord Krishna, Mathura is steeped in divine love and devotion. Explore ancient temples, participate in colorful festivals, and immerse yourself in Krishna's eternal leela.",
        ),
        city(
            "Vrindavan",
            "Uttar Pradesh",
            "The playground of Lord Krishna, Vrindavan resonates with divine love and spiritual bliss. Visit the sacred temples, participate in kirtan, and experience the eternal romance of Radha-Krishna.",
        ),
    ]
}

pub fn sample_articles() -> Vec<Article> {
    vec![
        article(
            "The Spiritual Significance of Ayodhya: A Journey Through Time",
            "spiritual-significance-ayodhya-journey-through-time",
            "Ayodhya, the ancient city that holds the heart of millions of devotees worldwide, stands as a testament to India's rich spiritual heritage...",
            "Discover the profound spiritual significance of Ayodhya, from the magnificent Ram Mandir to the sacred Sarayu River, and understand why this ancient city continues to inspire millions of pilgrims.",
            "Dr. Priya Sharma",
        ),
        article(
            "Experiencing the Divine: Ganga Aarti in Varanasi",
            "experiencing-divine-ganga-aarti-varanasi",
            "As the sun sets over the ancient city of Varanasi, the ghats come alive with the mesmerizing Ganga Aarti ceremony...",
            "Witness the magical Ganga Aarti ceremony in Varanasi, where thousands of devotees gather each evening to honor the sacred river Ganges in a spectacular display of devotion.",
            "Rajesh Kumar",
        ),
        article(
            "Yoga and Meditation in Rishikesh: A Transformative Experience",
            "yoga-meditation-rishikesh-transformative-experience",
            "Nestled in the foothills of the Himalayas, Rishikesh offers a unique opportunity for spiritual transformation through yoga and meditation...",
            "Explore how Rishikesh, the Yoga Capital of the World, offers transformative experiences through ancient practices of yoga and meditation amidst the serene Himalayan landscape.",
            "Swami Ananda",
        ),
    ]
}

pub fn sample_packages() -> Vec<Package> {
    vec![
        package(
            "Sacred Ayodhya Pilgrimage",
            "A comprehensive 3-day spiritual journey through Ayodhya, including visits to Ram Mandir, Hanuman Garhi, and boat rides on the sacred Sarayu River. Experience the divine presence of Lord Rama in his birthplace.",
            3,
            15000,
        ),
        package(
            "Varanasi Spiritual Immersion",
            "Dive deep into the spiritual essence of Varanasi with this 4-day package. Witness Ganga Aarti, explore ancient temples, take boat rides at sunrise, and experience the eternal city's mystical energy.",
            4,
            18000,
        ),
        package(
            "Rishikesh Yoga Retreat",
            "Transform your mind, body, and soul with this 7-day yoga retreat in Rishikesh. Includes daily yoga sessions, meditation, spiritual discourses, and adventure activities like river rafting.",
            7,
            25000,
        ),
    ]
}
