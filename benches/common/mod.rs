use compact_time::Timezone;
use rand::Rng;

// copied from integration tests
pub struct RandomFieldSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomFieldSource<R> {
    pub fn new(rng: R) -> RandomFieldSource<R> {
        RandomFieldSource { rng }
    }

    pub fn year(&mut self) -> i32 {
        loop {
            let y = self.rng.gen_range(-1_000_000..=1_000_000);
            if y != 0 {
                return y;
            }
        }
    }

    pub fn month(&mut self) -> u8 {
        self.rng.gen_range(1..=12)
    }

    pub fn day(&mut self) -> u8 {
        self.rng.gen_range(1..=28)
    }

    pub fn hour(&mut self) -> u8 {
        self.rng.gen_range(0..=23)
    }

    pub fn minute(&mut self) -> u8 {
        self.rng.gen_range(0..=59)
    }

    pub fn second(&mut self) -> u8 {
        self.rng.gen_range(0..=60)
    }

    pub fn nanosecond(&mut self) -> u32 {
        match self.rng.gen_range(0..4) {
            0 => 0,
            1 => self.rng.gen_range(0..1000) * 1_000_000,
            2 => self.rng.gen_range(0..1_000_000) * 1_000,
            _ => self.rng.gen_range(0..1_000_000_000),
        }
    }

    pub fn timezone(&mut self) -> Timezone<'static> {
        match self.rng.gen_range(0..3) {
            0 => Timezone::Zero,
            1 => Timezone::string(b"Europe/Berlin").unwrap(),
            _ => Timezone::lat_long(self.rng.gen_range(-8191..=8191), self.rng.gen_range(-16383..=16383))
                .unwrap(),
        }
    }
}
