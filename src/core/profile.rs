//! Fixed CV prose shown on the menu, about and skills screens.

pub const OWNER_NAME: &str = "Oscar Wendt";

pub const ABOUT: &str = "Oscar joined Layer 10 with excellent references from Ericsson AB/Microwave, \
where he, over the course of nearly a year, was solely responsible for the modernization and \
redevelopment of a new, centralized system for test management and execution.\n\
His time at Ericsson, which unfortunately came to an end due to downsizing in 2024, was preceded \
by studies in web development and security. During his studies, Oscar stood out as one of the few \
students who, despite limited prior experience, made significant progress particularly within the \
frontend domain. His genuine passion for programming, combined with experience from other industries \
such as service and sales, likely contributed to his steep learning curve. Oscar also has experience \
running his own business.\n\n\
In summary: Oscar is a web developer with a strong focus on modern frontend technologies. While his \
CV may not yet reflect many years in the field, he has shown remarkable potential for rapid growth \
toward a more senior role.";

pub const SKILLS: &str = "JavaScript, React, TypeScript, Node.js, Next.js, React Native, Expo, \
Firebase, SQL, Docker, Tor...";

pub const CAKE_ART: &str = include_str!("../../assets/cake.txt");
pub const EASTER_EGG_ART: &str = include_str!("../../assets/easter_egg.txt");

/// Footer line, e.g. "Oscar Wendt CV v1.0.0".
pub fn footer() -> String {
    format!("{} CV v{}", OWNER_NAME, env!("CARGO_PKG_VERSION"))
}
