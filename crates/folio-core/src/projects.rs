/// One project card. Defined at build time, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardItem {
    pub ordinal: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: [CardItem; 4] = [
    CardItem {
        ordinal: 0,
        title: "BlackJack Game",
        description: "This Java program implements a simple version of the popular card game, Blackjack",
        tags: &["Java", "Console"],
        image: "/images/blackjack.png",
        link: "https://github.com/ashokpakki/Blackjack",
    },
    CardItem {
        ordinal: 1,
        title: "Writer AI",
        description: "A simple content-generation app powered by the Grok AI API. Creates summaries, ideas, and drafts instantly.",
        tags: &["React", "Grok API"],
        image: "/images/writerai.png",
        link: "https://writer-ai-six.vercel.app/login",
    },
    CardItem {
        ordinal: 2,
        title: "Quote Gen",
        description: "A simple tool that displays a new inspirational quote every time you click the button. Great for getting quick motivation or refreshing your mind.",
        tags: &["JavaScript", "HTML", "CSS"],
        image: "/images/ran.png",
        link: "https://github.com/ashokpakki/ran",
    },
    CardItem {
        ordinal: 3,
        title: "Blog App",
        description: "A minimal blogging platform where users can create, edit, and publish posts with ease. Built for smooth writing and organized content management.",
        tags: &["React", "Node.js"],
        image: "/images/blogapp.png",
        link: "https://github.com/ashokpakki/Blog-app-main",
    },
];
